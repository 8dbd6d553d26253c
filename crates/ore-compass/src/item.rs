use serde::{Deserialize, Serialize};

use crate::{Identifier, OreType, world::AIR};

/// Item id of the untuned compass produced by the base crafting recipe.
pub static BASIC_ORE_COMPASS: Identifier =
    Identifier::from_static("orecompass", "basic_ore_compass");

/// A stack of items in an inventory or crafting slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Identifier,
    pub count: u32,
    /// Ore this compass is tuned to. Absent on untuned compasses and on any
    /// other item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuned_ore: Option<OreType>,
}

impl ItemStack {
    #[must_use]
    pub fn new(item: Identifier, count: u32) -> Self {
        Self {
            item,
            count,
            tuned_ore: None,
        }
    }

    #[must_use]
    pub fn one(item: Identifier) -> Self {
        Self::new(item, 1)
    }

    /// The empty stack.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(AIR.clone(), 0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item == AIR
    }

    #[must_use]
    pub fn tuned_ore(&self) -> Option<OreType> {
        self.tuned_ore
    }

    pub fn set_tuned_ore(&mut self, ore: OreType) {
        self.tuned_ore = Some(ore);
    }

    /// Builder form of [`ItemStack::set_tuned_ore`].
    #[must_use]
    pub fn tuned_to(mut self, ore: OreType) -> Self {
        self.set_tuned_ore(ore);
        self
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}
