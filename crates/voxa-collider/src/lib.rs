//! Greedy decomposition of chunk voxels into axis-aligned collision boxes.
#![forbid(unsafe_code)]

mod claim;
mod decompose;

pub use claim::ClaimMap;
pub use decompose::{VoxelBox, decompose, decompose_into};
