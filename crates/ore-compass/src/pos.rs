use serde::{Deserialize, Serialize};

/// Integer block coordinate.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Wraps at the `i32` edges.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }

    /// `None` when any axis would leave the `i32` range.
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// Squared Euclidean distance in `i64`. Exact for world-border
    /// coordinates; saturates at `i64::MAX` for points near opposite `i32` edges.
    pub const fn dist_sqr(self, other: Self) -> i64 {
        let dx = other.x as i64 - self.x as i64;
        let dy = other.y as i64 - self.y as i64;
        let dz = other.z as i64 - self.z as i64;
        dx.saturating_mul(dx)
            .saturating_add(dy.saturating_mul(dy))
            .saturating_add(dz.saturating_mul(dz))
    }

    /// Every position of the cube of half-width `range` around `self`,
    /// x outermost, then y, then z, each ascending.
    ///
    /// `range` is capped at `i32::MAX` and cells outside the `i32` range are
    /// skipped.
    pub fn cube(self, range: u32) -> impl Iterator<Item = BlockPos> {
        let r = i32::try_from(range).unwrap_or(i32::MAX);
        (-r..=r).flat_map(move |dx| {
            (-r..=r).flat_map(move |dy| {
                (-r..=r).filter_map(move |dz| self.checked_offset(dx, dy, dz))
            })
        })
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<BlockPos> for [i32; 3] {
    fn from(pos: BlockPos) -> Self {
        [pos.x, pos.y, pos.z]
    }
}
