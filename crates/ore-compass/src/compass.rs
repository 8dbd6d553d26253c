//! What a held compass shows: the target it points at and how many ores are near.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{BlockGetter, BlockPos, ItemStack, OreType, scan};

/// Scan settings for compass readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    /// Half-width of the scanned cube.
    pub range: u32,
    /// Upper bound applied to `range`, keeping a single scan bounded.
    pub max_range: u32,
    /// Ores an untuned compass looks for.
    pub default_targets: Vec<OreType>,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            range: 16,
            max_range: 64,
            default_targets: OreType::ALL.to_vec(),
        }
    }
}

impl CompassConfig {
    /// `range` clamped to `max_range`.
    #[must_use]
    pub fn effective_range(&self) -> u32 {
        self.range.min(self.max_range)
    }

    /// Ores a compass held as `stack` looks for.
    #[must_use]
    pub fn targets_for(&self, stack: &ItemStack) -> Vec<OreType> {
        match stack.tuned_ore() {
            Some(ore) => vec![ore],
            None => self.default_targets.clone(),
        }
    }
}

/// Result of one compass refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct CompassReading {
    /// Closest matching block, if any lies within range.
    pub target: Option<BlockPos>,
    /// Heading toward `target` in degrees, `None` without a target.
    pub bearing: Option<f64>,
    /// Matching blocks within range.
    pub count: usize,
}

impl CompassReading {
    /// Compute the reading for a compass held as `stack` by an observer at `observer`.
    pub fn take<W: BlockGetter + ?Sized>(
        config: &CompassConfig,
        world: &W,
        observer: BlockPos,
        stack: &ItemStack,
    ) -> Self {
        let range = config.effective_range();
        let targets = config.targets_for(stack);

        let target = scan::find_nearest(world, observer, range, &targets);
        let bearing = target.map(|target| scan::bearing_to_target(observer, target));
        let count = scan::count_matches(world, observer, range, &targets);

        debug!(?observer, tuned = ?stack.tuned_ore(), ?target, count, "compass reading");
        Self {
            target,
            bearing,
            count,
        }
    }
}
