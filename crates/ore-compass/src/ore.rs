//! Ore categories the compass can be tuned to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Identifier;

/// A named family of ore blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OreType {
    Coal,
    Iron,
    Copper,
    Gold,
    Redstone,
    Lapis,
    Diamond,
    Emerald,
    Quartz,
    AncientDebris,
}

impl OreType {
    /// All ore types, in declaration order.
    pub const ALL: [OreType; 10] = [
        Self::Coal,
        Self::Iron,
        Self::Copper,
        Self::Gold,
        Self::Redstone,
        Self::Lapis,
        Self::Diamond,
        Self::Emerald,
        Self::Quartz,
        Self::AncientDebris,
    ];

    /// Name used in recipe definitions and item tags.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Coal => "coal",
            Self::Iron => "iron",
            Self::Copper => "copper",
            Self::Gold => "gold",
            Self::Redstone => "redstone",
            Self::Lapis => "lapis",
            Self::Diamond => "diamond",
            Self::Emerald => "emerald",
            Self::Quartz => "quartz",
            Self::AncientDebris => "ancient_debris",
        }
    }

    /// Vanilla block paths belonging to this ore.
    #[must_use]
    pub const fn blocks(self) -> &'static [&'static str] {
        match self {
            Self::Coal => &["coal_ore", "deepslate_coal_ore"],
            Self::Iron => &["iron_ore", "deepslate_iron_ore"],
            Self::Copper => &["copper_ore", "deepslate_copper_ore"],
            Self::Gold => &["gold_ore", "deepslate_gold_ore", "nether_gold_ore"],
            Self::Redstone => &["redstone_ore", "deepslate_redstone_ore"],
            Self::Lapis => &["lapis_ore", "deepslate_lapis_ore"],
            Self::Diamond => &["diamond_ore", "deepslate_diamond_ore"],
            Self::Emerald => &["emerald_ore", "deepslate_emerald_ore"],
            Self::Quartz => &["nether_quartz_ore"],
            Self::AncientDebris => &["ancient_debris"],
        }
    }

    /// Whether `block` is one of this ore's blocks.
    #[must_use]
    pub fn matches(self, block: &Identifier) -> bool {
        block.is_vanilla() && self.blocks().iter().any(|&path| path == block.path())
    }

    /// Look up an ore by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ore| ore.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for OreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves ore names coming from recipe data.
pub trait OreRegistry {
    fn resolve(&self, name: &str) -> Option<OreType>;
}

/// The built-in ore table.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinOres;

impl OreRegistry for BuiltinOres {
    fn resolve(&self, name: &str) -> Option<OreType> {
        OreType::from_name(name)
    }
}
