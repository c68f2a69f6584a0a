use voxa_chunk::BlockCoord;
use voxa_collider::VoxelBox;
use voxa_geom::Vec3;

use crate::world::WorldId;

/// Opaque handle to a body owned by the physics backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

/// Tags a physics body with what it belongs to, so contacts can be routed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyOwner {
    Mesh(u32),
    VoxelChunk { world: WorldId, chunk: BlockCoord },
}

/// Static compound body for one chunk view. Box centers are relative to `position`.
#[derive(Clone, Copy, Debug)]
pub struct ChunkBody<'a> {
    pub owner: BodyOwner,
    pub position: Vec3,
    pub colliders: &'a [VoxelBox],
    /// The owning world's user flags, for contact filtering.
    pub flags: u8,
}

/// Rigid-body engine the world hands its chunk colliders to. Chunk bodies are
/// static (zero mass).
pub trait PhysicsBackend {
    fn add_body(&mut self, body: ChunkBody<'_>) -> BodyHandle;
    fn remove_body(&mut self, handle: BodyHandle);
}
