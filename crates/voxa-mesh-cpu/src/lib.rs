//! CPU surface mesher: per-voxel faces with baked ambient occlusion.
#![forbid(unsafe_code)]

mod ao;
mod build;
mod chunk;
mod constants;
mod face;
mod mesh_build;

pub use ao::{face_ao, flip_diagonal, vertex_ao};
pub use build::build_chunk_mesh;
pub use chunk::{ChunkMesh, chunk_footprint};
pub use face::Face;
pub use mesh_build::MeshBuild;
