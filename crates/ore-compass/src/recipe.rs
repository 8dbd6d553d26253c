//! Shapeless recipe that tunes an Ore Compass to an ore type.
//!
//! The grid must hold one compass and exactly `ore_count` ore items, in any
//! arrangement. The result is a copy of that compass tagged with the recipe's
//! ore type.

use tracing::warn;

use crate::{BASIC_ORE_COMPASS, CraftingContainer, Identifier, Ingredient, ItemStack, OreRegistry};

/// Catalyst count used when a definition omits `ore_count`.
pub const DEFAULT_ORE_COUNT: u32 = 4;

/// Grouping shown in the recipe book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CraftingBookCategory {
    Building,
    Redstone,
    Equipment,
    Misc,
}

/// A recipe turning one compass plus `ore_count` ores into a tuned compass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneCompassRecipe {
    pub(crate) id: Identifier,
    pub(crate) compass: Ingredient,
    pub(crate) ore: Ingredient,
    pub(crate) ore_type: String,
    pub(crate) ore_count: u32,
}

impl TuneCompassRecipe {
    #[must_use]
    pub fn new(
        id: Identifier,
        compass: Ingredient,
        ore: Ingredient,
        ore_type: impl Into<String>,
        ore_count: u32,
    ) -> Self {
        Self {
            id,
            compass,
            ore,
            ore_type: ore_type.into(),
            ore_count,
        }
    }

    #[must_use]
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    #[must_use]
    pub fn compass(&self) -> &Ingredient {
        &self.compass
    }

    #[must_use]
    pub fn ore(&self) -> &Ingredient {
        &self.ore
    }

    /// Ore name as written in the definition; it may not resolve.
    #[must_use]
    pub fn ore_type(&self) -> &str {
        &self.ore_type
    }

    #[must_use]
    pub fn ore_count(&self) -> u32 {
        self.ore_count
    }

    #[must_use]
    pub fn category(&self) -> CraftingBookCategory {
        CraftingBookCategory::Equipment
    }

    /// Whether the grid holds exactly one compass, exactly `ore_count` ores and
    /// nothing else.
    pub fn matches<C: CraftingContainer + ?Sized>(&self, container: &C) -> bool {
        let mut has_compass = false;
        let mut ore_matches = 0u32;

        for stack in container.slots() {
            if stack.is_empty() {
                continue;
            }

            if self.compass.test(stack) {
                if has_compass {
                    return false;
                }
                has_compass = true;
            } else if self.ore.test(stack) {
                ore_matches += 1;
            } else {
                return false;
            }
        }

        has_compass && ore_matches == self.ore_count
    }

    /// Copy the grid's compass and tag it with this recipe's ore.
    ///
    /// Returns the empty stack when the grid holds no compass. An ore name the
    /// registry does not know leaves the copy untagged.
    pub fn assemble<C, R>(&self, container: &C, registry: &R) -> ItemStack
    where
        C: CraftingContainer + ?Sized,
        R: OreRegistry + ?Sized,
    {
        let Some(compass) = container.slots().find(|stack| self.compass.test(stack)) else {
            return ItemStack::empty();
        };

        let mut result = compass.clone();
        self.tag(&mut result, registry);
        result
    }

    /// Display-only output for recipe book previews. Actual crafting goes
    /// through [`TuneCompassRecipe::assemble`].
    pub fn result_item<R: OreRegistry + ?Sized>(&self, registry: &R) -> ItemStack {
        let mut result = ItemStack::one(BASIC_ORE_COMPASS.clone());
        self.tag(&mut result, registry);
        result
    }

    /// Whether a `width × height` grid has room for one compass and the ores.
    pub fn can_craft_in_dimensions(&self, width: usize, height: usize) -> bool {
        let needed = usize::try_from(self.ore_count)
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        width.saturating_mul(height) >= needed
    }

    fn tag<R: OreRegistry + ?Sized>(&self, stack: &mut ItemStack, registry: &R) {
        match registry.resolve(&self.ore_type) {
            Some(ore) => stack.set_tuned_ore(ore),
            None => warn!(
                recipe = %self.id,
                ore_type = %self.ore_type,
                "unknown ore type, compass left untuned"
            ),
        }
    }
}
