//! Read access to the block world.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{BlockPos, Identifier};

/// The block every unset position holds.
pub static AIR: Identifier = Identifier::vanilla("air");

/// Read-only block lookup provided by the host world.
///
/// Lookups are total: unloaded or empty positions report air rather than failing.
pub trait BlockGetter {
    fn block_at(&self, pos: BlockPos) -> &Identifier;
}

impl<T: BlockGetter + ?Sized> BlockGetter for &T {
    fn block_at(&self, pos: BlockPos) -> &Identifier {
        (**self).block_at(pos)
    }
}

/// Map-backed world holding only the non-air blocks.
#[derive(Debug, Default, Clone)]
pub struct SparseWorld {
    blocks: FxHashMap<BlockPos, Identifier>,
}

/// One entry of a world file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub pos: BlockPos,
    pub block: Identifier,
}

#[derive(Serialize, Deserialize)]
struct WorldFile {
    blocks: Vec<PlacedBlock>,
}

impl SparseWorld {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block, returning the one it replaced. Placing air clears the position.
    pub fn set_block(&mut self, pos: BlockPos, block: Identifier) -> Option<Identifier> {
        if block == AIR {
            self.blocks.remove(&pos)
        } else {
            self.blocks.insert(pos, block)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Parse a `{"blocks": [{"pos": [x, y, z], "block": "id"}, ...]}` document.
    /// Later entries overwrite earlier ones at the same position.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: WorldFile = serde_json::from_str(json)?;
        Ok(file.blocks.into_iter().collect())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut blocks: Vec<_> = self
            .blocks
            .iter()
            .map(|(&pos, block)| PlacedBlock {
                pos,
                block: block.clone(),
            })
            .collect();
        blocks.sort_by_key(|placed| <[i32; 3]>::from(placed.pos));
        serde_json::to_string_pretty(&WorldFile { blocks })
    }
}

impl FromIterator<PlacedBlock> for SparseWorld {
    fn from_iter<I: IntoIterator<Item = PlacedBlock>>(iter: I) -> Self {
        let mut world = Self::new();
        for placed in iter {
            world.set_block(placed.pos, placed.block);
        }
        world
    }
}

impl BlockGetter for SparseWorld {
    fn block_at(&self, pos: BlockPos) -> &Identifier {
        self.blocks.get(&pos).unwrap_or(&AIR)
    }
}
