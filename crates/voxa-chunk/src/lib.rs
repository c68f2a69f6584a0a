//! Sparse block storage and chunk-view neighborhood addressing.
#![forbid(unsafe_code)]

mod block;
mod coord;
mod neighborhood;
mod store;

pub use block::Block;
pub use coord::{BlockCoord, LocalPos, split_world};
pub use neighborhood::{NeighborKeys, Neighborhood};
pub use store::{BlockId, BlockStore, BlockStoreStats};

/// Edge length of a block, in voxels.
pub const CHUNK_SIZE: usize = 16;
/// Voxels per block.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
/// Offset between a block's origin and the origin of the chunk view bound to it.
pub const HALF_CHUNK: i32 = (CHUNK_SIZE / 2) as i32;
