//! Brute-force ore search over a cube of blocks.
//!
//! Cost is `(2 * range + 1)^3` block lookups times the number of ore types,
//! so callers keep `range` to a few dozen blocks and scan on UI refresh, not
//! every frame.

use tracing::{debug, trace};

use crate::{BlockGetter, BlockPos, OreType};

/// The first ore in `ores` matching the block at `pos`, if any.
fn classify<W: BlockGetter + ?Sized>(
    world: &W,
    pos: BlockPos,
    ores: &[OreType],
) -> Option<OreType> {
    let block = world.block_at(pos);
    ores.iter().copied().find(|ore| ore.matches(block))
}

/// Find the matching block closest to `origin` within the cube of half-width `range`.
///
/// Ties in squared distance keep the position visited first (x, then y, then z,
/// each ascending).
pub fn find_nearest<W: BlockGetter + ?Sized>(
    world: &W,
    origin: BlockPos,
    range: u32,
    ores: &[OreType],
) -> Option<BlockPos> {
    let mut nearest: Option<(BlockPos, i64)> = None;

    for pos in origin.cube(range) {
        let Some(ore) = classify(world, pos, ores) else {
            continue;
        };
        let distance = origin.dist_sqr(pos);
        trace!(?pos, %ore, distance, "ore candidate");
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((pos, distance));
        }
    }

    debug!(?origin, range, found = ?nearest.map(|(pos, _)| pos), "ore scan complete");
    nearest.map(|(pos, _)| pos)
}

/// [`find_nearest`] for a single ore type.
pub fn find_nearest_of<W: BlockGetter + ?Sized>(
    world: &W,
    origin: BlockPos,
    range: u32,
    ore: OreType,
) -> Option<BlockPos> {
    find_nearest(world, origin, range, &[ore])
}

/// Count the cells within the cube matching any of `ores`. Each cell counts once.
pub fn count_matches<W: BlockGetter + ?Sized>(
    world: &W,
    origin: BlockPos,
    range: u32,
    ores: &[OreType],
) -> usize {
    let count = origin
        .cube(range)
        .filter(|&pos| classify(world, pos, ores).is_some())
        .count();
    debug!(?origin, range, count, "ore count complete");
    count
}

/// Compass heading from `observer` to `target` in degrees, within `[0, 360)`.
///
/// Only the horizontal (x, z) displacement matters; 0 points north (-z) and a
/// target directly +x of the observer reads 90.
pub fn bearing_to_target(observer: BlockPos, target: BlockPos) -> f64 {
    let dx = f64::from(target.x) - f64::from(observer.x);
    let dz = f64::from(target.z) - f64::from(observer.z);

    let degrees = dz.atan2(dx).to_degrees();
    let mut bearing = (degrees + 90.0) % 360.0;
    if bearing < 0.0 {
        bearing += 360.0;
    }
    // A tiny negative remainder can round up to exactly 360 after correction.
    if bearing >= 360.0 { 0.0 } else { bearing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identifier, SparseWorld};

    fn world_with(blocks: &[([i32; 3], &'static str)]) -> SparseWorld {
        let mut world = SparseWorld::new();
        for &(pos, block) in blocks {
            world.set_block(pos.into(), Identifier::vanilla(block));
        }
        world
    }

    #[test]
    fn nearest_prefers_smaller_distance() {
        let world = world_with(&[([1, 1, 1], "iron_ore"), ([-1, 0, 0], "iron_ore")]);
        assert_eq!(
            find_nearest(&world, BlockPos::ORIGIN, 1, &[OreType::Iron]),
            Some(BlockPos::new(-1, 0, 0))
        );
    }

    #[test]
    fn ties_keep_first_visited() {
        let world = world_with(&[
            ([1, 0, 0], "coal_ore"),
            ([0, 0, -1], "coal_ore"),
            ([0, 1, 0], "coal_ore"),
        ]);
        // x = 0 is visited before x = 1; within x = 0, y = 0 before y = 1.
        assert_eq!(
            find_nearest(&world, BlockPos::ORIGIN, 2, &[OreType::Coal]),
            Some(BlockPos::new(0, 0, -1))
        );
    }

    #[test]
    fn zero_range_only_checks_origin() {
        let origin = BlockPos::new(4, 70, -2);
        let world = world_with(&[([4, 70, -2], "gold_ore"), ([5, 70, -2], "gold_ore")]);
        assert_eq!(find_nearest(&world, origin, 0, &[OreType::Gold]), Some(origin));
        assert_eq!(count_matches(&world, origin, 0, &[OreType::Gold]), 1);

        let shifted = origin.offset(-1, 0, 0);
        assert_eq!(find_nearest(&world, shifted, 0, &[OreType::Gold]), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let world = world_with(&[([3, 0, 0], "diamond_ore")]);
        assert_eq!(find_nearest_of(&world, BlockPos::ORIGIN, 2, OreType::Diamond), None);
        assert_eq!(
            find_nearest_of(&world, BlockPos::ORIGIN, 3, OreType::Diamond),
            Some(BlockPos::new(3, 0, 0))
        );
    }

    #[test]
    fn scan_at_the_coordinate_edge() {
        let edge = BlockPos::new(i32::MAX, 0, 0);
        let world = world_with(&[
            ([i32::MAX - 1, 0, 0], "iron_ore"),
            ([i32::MIN, 0, 0], "iron_ore"),
        ]);
        assert_eq!(
            find_nearest(&world, edge, 1, &[OreType::Iron]),
            Some(BlockPos::new(i32::MAX - 1, 0, 0))
        );
        assert_eq!(count_matches(&world, edge, 1, &[OreType::Iron]), 1);
    }

    #[test]
    fn empty_ore_set_matches_nothing() {
        let world = world_with(&[([0, 0, 0], "iron_ore")]);
        assert_eq!(find_nearest(&world, BlockPos::ORIGIN, 1, &[]), None);
        assert_eq!(count_matches(&world, BlockPos::ORIGIN, 1, &[]), 0);
    }

    #[test]
    fn other_ores_are_not_matched() {
        let world = world_with(&[([1, 0, 0], "emerald_ore")]);
        assert_eq!(find_nearest(&world, BlockPos::ORIGIN, 1, &[OreType::Iron]), None);
    }

    #[test]
    fn count_is_per_cell() {
        let world = world_with(&[
            ([0, 0, 0], "iron_ore"),
            ([1, 0, 0], "deepslate_iron_ore"),
            ([0, 1, 0], "copper_ore"),
            ([5, 5, 5], "iron_ore"),
        ]);
        // Listing Iron twice must not double count.
        let ores = [OreType::Iron, OreType::Copper, OreType::Iron];
        assert_eq!(count_matches(&world, BlockPos::ORIGIN, 1, &ores), 3);
        assert_eq!(count_matches(&world, BlockPos::ORIGIN, 1, &[OreType::Copper]), 1);
    }

    fn assert_bearing(target: [i32; 3], expected: f64) {
        let bearing = bearing_to_target(BlockPos::ORIGIN, target.into());
        assert!(
            (bearing - expected).abs() < 1e-9,
            "{target:?}: expected {expected}, got {bearing}"
        );
    }

    #[test]
    fn bearing_cardinals() {
        assert_bearing([1, 0, 0], 90.0);
        assert_bearing([0, 0, 1], 180.0);
        assert_bearing([-1, 0, 0], 270.0);
        assert_bearing([0, 0, -1], 0.0);
        assert_bearing([1, 0, -1], 45.0);
        // Same column: atan2(0, 0) is 0.
        assert_bearing([0, 5, 0], 90.0);
    }

    #[test]
    fn bearing_ignores_height() {
        let observer = BlockPos::new(10, 64, 10);
        let low = BlockPos::new(13, -50, 6);
        let high = BlockPos::new(13, 300, 6);
        assert!(
            (bearing_to_target(observer, low) - bearing_to_target(observer, high)).abs() < 1e-12
        );
    }

    #[test]
    fn bearing_stays_in_range() {
        let observer = BlockPos::new(-7, 0, 3);
        for pos in observer.cube(4) {
            let bearing = bearing_to_target(observer, pos);
            assert!((0.0..360.0).contains(&bearing), "{pos:?} -> {bearing}");
        }
    }
}
