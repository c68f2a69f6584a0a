use serde::{Deserialize, Serialize};

use crate::CHUNK_SIZE;

const N: i32 = CHUNK_SIZE as i32;

/// Integer coordinate of a block (and of the chunk view bound to it).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl BlockCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// Block containing a world voxel. Floors toward negative infinity.
    #[inline]
    pub fn containing(wx: i32, wy: i32, wz: i32) -> Self {
        Self {
            cx: wx.div_euclid(N),
            cy: wy.div_euclid(N),
            cz: wz.div_euclid(N),
        }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// World coordinate of local voxel `(0,0,0)`.
    #[inline]
    pub fn origin(self) -> (i32, i32, i32) {
        (self.cx * N, self.cy * N, self.cz * N)
    }
}

impl From<(i32, i32, i32)> for BlockCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<BlockCoord> for (i32, i32, i32) {
    fn from(value: BlockCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}

/// Position of a voxel inside its block, each axis in `[0, CHUNK_SIZE)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// Splits a world voxel coordinate into its block and the local position inside it.
#[inline]
pub fn split_world(wx: i32, wy: i32, wz: i32) -> (BlockCoord, LocalPos) {
    let local = LocalPos {
        x: wx.rem_euclid(N) as usize,
        y: wy.rem_euclid(N) as usize,
        z: wz.rem_euclid(N) as usize,
    };
    (BlockCoord::containing(wx, wy, wz), local)
}
