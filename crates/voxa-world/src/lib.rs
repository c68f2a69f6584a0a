//! Editable voxel world: storage, lazy mesh/collider rebuilds, ground and path queries.
#![forbid(unsafe_code)]

pub mod chunk;
pub mod config;
pub mod pathfind;
pub mod physics;
pub mod raycast;
pub mod render;
pub mod world;
pub mod worldgen;

pub use chunk::ChunkView;
pub use config::WorldConfig;
pub use physics::{BodyHandle, BodyOwner, ChunkBody, PhysicsBackend};
pub use raycast::RayHit;
pub use render::ChunkRenderer;
pub use world::{RebuildStats, World, WorldId, WorldStats};
pub use worldgen::{TerrainConfig, generate_terrain};
