use hashbrown::HashMap;
use voxa_blocks::Voxel;

use crate::block::Block;
use crate::coord::{BlockCoord, split_world};
use crate::neighborhood::{NeighborKeys, Neighborhood};

/// Stable handle to a block inside a [`BlockStore`]. Blocks are never removed,
/// so an id stays valid for the lifetime of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(u32);

impl BlockId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct BlockStoreStats {
    pub blocks: usize,
    pub populated_blocks: usize,
}

/// Sparse arena of blocks keyed by block coordinate. Blocks are created on first
/// write and live as long as the store.
#[derive(Default, Debug)]
pub struct BlockStore {
    blocks: Vec<Block>,
    index: HashMap<BlockCoord, BlockId>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn stats(&self) -> BlockStoreStats {
        BlockStoreStats {
            blocks: self.blocks.len(),
            populated_blocks: self.blocks.iter().filter(|b| !b.is_all_empty()).count(),
        }
    }

    /// Returns the id of the block at `coord`, allocating an all-empty block if absent.
    pub fn get_or_create(&mut self, coord: BlockCoord) -> BlockId {
        if let Some(id) = self.index.get(&coord) {
            return *id;
        }
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(Block::empty());
        self.index.insert(coord, id);
        id
    }

    #[inline]
    pub fn id_of(&self, coord: BlockCoord) -> Option<BlockId> {
        self.index.get(&coord).copied()
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    #[inline]
    pub fn get(&self, coord: BlockCoord) -> Option<&Block> {
        self.id_of(coord).map(|id| self.block(id))
    }

    /// Reads a world voxel. Unpopulated space reads as empty without allocating.
    pub fn voxel(&self, wx: i32, wy: i32, wz: i32) -> Voxel {
        let (coord, local) = split_world(wx, wy, wz);
        self.get(coord)
            .map(|b| b.get(local.x, local.y, local.z))
            .unwrap_or(Voxel::EMPTY)
    }

    /// Writes a world voxel, creating its block if needed. Returns the previous value.
    pub fn set_voxel(&mut self, wx: i32, wy: i32, wz: i32, voxel: Voxel) -> Voxel {
        let (coord, local) = split_world(wx, wy, wz);
        let id = self.get_or_create(coord);
        self.blocks[id.index()].set(local.x, local.y, local.z, voxel)
    }

    /// Resolves (and allocates where missing) the eight blocks a chunk view at
    /// `coord` reads from: the block itself and its predecessors on each axis.
    pub fn neighbor_keys(&mut self, coord: BlockCoord) -> NeighborKeys {
        let mut ids = [BlockId(0); 8];
        for dz in 0..2 {
            for dy in 0..2 {
                for dx in 0..2 {
                    let at = coord.offset(dx - 1, dy - 1, dz - 1);
                    ids[NeighborKeys::slot(dx as usize, dy as usize, dz as usize)] =
                        self.get_or_create(at);
                }
            }
        }
        NeighborKeys::new(ids)
    }

    #[inline]
    pub fn neighborhood(&self, keys: &NeighborKeys) -> Neighborhood<'_> {
        Neighborhood::new(keys.ids().map(|id| self.block(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxa_blocks::VoxelKind;

    #[test]
    fn reads_do_not_allocate() {
        let store = BlockStore::new();
        assert_eq!(store.voxel(1000, -3, 7), Voxel::EMPTY);
        assert!(store.is_empty());
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut store = BlockStore::new();
        let a = store.get_or_create(BlockCoord::new(1, 2, 3));
        let b = store.get_or_create(BlockCoord::new(1, 2, 3));
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
        assert!(store.block(a).is_all_empty());
    }

    #[test]
    fn set_returns_previous() {
        let mut store = BlockStore::new();
        let red = Voxel::solid(255, 0, 0);
        assert_eq!(store.set_voxel(-1, -1, -1, red), Voxel::EMPTY);
        assert_eq!(store.set_voxel(-1, -1, -1, Voxel::obstacle()).kind, VoxelKind::Solid);
        assert_eq!(store.voxel(-1, -1, -1), Voxel::obstacle());
        assert_eq!(store.id_of(BlockCoord::new(-1, -1, -1)), Some(BlockId(0)));
        assert_eq!(store.stats().populated_blocks, 1);
    }

    #[test]
    fn neighbor_keys_cover_the_lower_octant() {
        let mut store = BlockStore::new();
        let keys = store.neighbor_keys(BlockCoord::new(0, 0, 0));
        assert_eq!(store.len(), 8);
        assert_eq!(
            keys.ids()[NeighborKeys::slot(1, 1, 1)],
            store.get_or_create(BlockCoord::new(0, 0, 0))
        );
        assert_eq!(
            keys.ids()[NeighborKeys::slot(0, 0, 0)],
            store.get_or_create(BlockCoord::new(-1, -1, -1))
        );
    }
}
