//! Ore Compass: find the nearest ore and tune compasses by crafting.
//!
//! Two independent pieces, both synchronous and called from the game thread:
//!
//! - [`scan`]: cube search around a position for blocks of chosen [`OreType`]s,
//!   plus the compass bearing toward a hit.
//! - [`TuneCompassRecipe`]: shapeless crafting recipe that takes one compass and
//!   a fixed number of ores and yields the compass tagged with that ore.
//!
//! The host supplies the world ([`BlockGetter`]), crafting grid
//! ([`CraftingContainer`]) and ore name lookup ([`OreRegistry`]).
//!
//! # Example
//!
//! ```
//! use ore_compass::{BlockPos, Identifier, OreType, SparseWorld, scan};
//!
//! let mut world = SparseWorld::new();
//! world.set_block(BlockPos::new(2, -1, 0), Identifier::vanilla("deepslate_iron_ore"));
//!
//! let hit = scan::find_nearest(&world, BlockPos::ORIGIN, 4, &[OreType::Iron]);
//! assert_eq!(hit, Some(BlockPos::new(2, -1, 0)));
//! ```

mod compass;
mod container;
mod error;
mod identifier;
mod ingredient;
mod item;
mod ore;
mod pos;
mod recipe;
pub mod scan;
mod serializer;
mod world;

pub use compass::{CompassConfig, CompassReading};
pub use container::{CraftingContainer, CraftingGrid};
pub use error::{RecipeError, RecipeResult};
pub use identifier::{DEFAULT_NAMESPACE, Identifier, IdentifierError};
pub use ingredient::Ingredient;
pub use item::{BASIC_ORE_COMPASS, ItemStack};
pub use ore::{BuiltinOres, OreRegistry, OreType};
pub use pos::BlockPos;
pub use recipe::{CraftingBookCategory, DEFAULT_ORE_COUNT, TuneCompassRecipe};
pub use serializer::TUNE_COMPASS_SERIALIZER;
pub use world::{AIR, BlockGetter, PlacedBlock, SparseWorld};
