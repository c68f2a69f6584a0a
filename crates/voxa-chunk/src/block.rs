use voxa_blocks::Voxel;

use crate::{CHUNK_SIZE, CHUNK_VOLUME};

/// Dense `CHUNK_SIZE³` voxel array. Index order is x fastest, then y, then z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    voxels: Vec<Voxel>,
}

impl Default for Block {
    fn default() -> Self {
        Self::empty()
    }
}

impl Block {
    pub fn empty() -> Self {
        Self {
            voxels: vec![Voxel::EMPTY; CHUNK_VOLUME],
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE);
        (z * CHUNK_SIZE + y) * CHUNK_SIZE + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.voxels[Self::idx(x, y, z)]
    }

    /// Writes a voxel and returns what was there before.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel: Voxel) -> Voxel {
        std::mem::replace(&mut self.voxels[Self::idx(x, y, z)], voxel)
    }

    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        self.voxels.iter().all(|v| v.kind.is_empty())
    }
}
