use voxa_blocks::Voxel;

use crate::block::Block;
use crate::store::BlockId;
use crate::{CHUNK_SIZE, HALF_CHUNK};

const N: i32 = CHUNK_SIZE as i32;

/// Cached arena keys of the 2x2x2 blocks behind one chunk view.
///
/// Slot `(dx, dy, dz)` holds the block at `coord + (d - 1)` per axis, so slot
/// `(1, 1, 1)` is the chunk's own block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborKeys {
    ids: [BlockId; 8],
}

impl NeighborKeys {
    #[inline]
    pub(crate) fn new(ids: [BlockId; 8]) -> Self {
        Self { ids }
    }

    #[inline]
    pub fn slot(dx: usize, dy: usize, dz: usize) -> usize {
        dz * 4 + dy * 2 + dx
    }

    #[inline]
    pub fn ids(&self) -> [BlockId; 8] {
        self.ids
    }
}

/// Borrowed view over the eight blocks of a chunk, addressed in chunk-local space.
///
/// Chunk-local `(0,0,0)` sits half a block before the chunk's own block origin, so
/// local coordinates in `[-1, CHUNK_SIZE]` (one voxel past the footprint on every
/// side) always land inside the neighborhood.
#[derive(Clone, Copy)]
pub struct Neighborhood<'a> {
    blocks: [&'a Block; 8],
}

impl<'a> Neighborhood<'a> {
    #[inline]
    pub fn new(blocks: [&'a Block; 8]) -> Self {
        Self { blocks }
    }

    #[inline]
    fn split_axis(local: i32) -> (usize, usize) {
        let shifted = local + HALF_CHUNK;
        debug_assert!(
            (0..2 * N).contains(&shifted),
            "chunk-local coordinate {local} is outside the neighborhood"
        );
        if shifted >= N {
            (1, (shifted - N) as usize)
        } else {
            (0, shifted as usize)
        }
    }

    /// Voxel at a chunk-local coordinate.
    #[inline]
    pub fn voxel_at(&self, lx: i32, ly: i32, lz: i32) -> Voxel {
        let (bx, vx) = Self::split_axis(lx);
        let (by, vy) = Self::split_axis(ly);
        let (bz, vz) = Self::split_axis(lz);
        self.blocks[NeighborKeys::slot(bx, by, bz)].get(vx, vy, vz)
    }

    #[inline]
    pub fn is_solid(&self, lx: i32, ly: i32, lz: i32) -> bool {
        self.voxel_at(lx, ly, lz).kind.is_solid()
    }
}
