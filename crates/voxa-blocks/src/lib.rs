//! Voxel value types and color transfer helpers.
#![forbid(unsafe_code)]

pub mod color;
pub mod types;

pub use color::{Rgb, srgb_to_linear};
pub use types::{Voxel, VoxelKind};
