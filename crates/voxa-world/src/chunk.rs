use voxa_chunk::{BlockCoord, BlockStore, HALF_CHUNK, NeighborKeys};
use voxa_collider::{ClaimMap, VoxelBox, decompose_into};
use voxa_geom::{Sphere, Vec3};
use voxa_mesh_cpu::{ChunkMesh, build_chunk_mesh, chunk_footprint};

use crate::physics::{BodyHandle, BodyOwner, ChunkBody, PhysicsBackend};

/// Renderable and collidable unit bound to one block.
///
/// Owns no voxels: it keeps the arena ids of its 2x2x2 neighborhood and resolves
/// them through the [`BlockStore`] when rebuilding. Its local space starts half a
/// block before its block's origin.
#[derive(Debug)]
pub struct ChunkView {
    coord: BlockCoord,
    keys: NeighborKeys,
    mesh: ChunkMesh,
    colliders: Vec<VoxelBox>,
    needs_mesh_update: bool,
    needs_collider_update: bool,
    body: Option<BodyHandle>,
}

impl ChunkView {
    pub(crate) fn new(coord: BlockCoord, keys: NeighborKeys) -> Self {
        let (ox, oy, oz) = coord.origin();
        let position = Vec3::from_grid(ox - HALF_CHUNK, oy - HALF_CHUNK, oz - HALF_CHUNK);
        Self {
            coord,
            keys,
            mesh: ChunkMesh::new(position),
            colliders: Vec::new(),
            needs_mesh_update: true,
            needs_collider_update: true,
            body: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> BlockCoord {
        self.coord
    }

    /// World position of chunk-local `(0,0,0)`.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.mesh.position
    }

    /// Last built mesh. Stale while [`needs_mesh_update`](Self::needs_mesh_update) is set.
    #[inline]
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Last built collider boxes, chunk-local.
    #[inline]
    pub fn colliders(&self) -> &[VoxelBox] {
        &self.colliders
    }

    #[inline]
    pub fn needs_mesh_update(&self) -> bool {
        self.needs_mesh_update
    }

    #[inline]
    pub fn needs_collider_update(&self) -> bool {
        self.needs_collider_update
    }

    #[inline]
    pub fn body(&self) -> Option<BodyHandle> {
        self.body
    }

    /// Sphere around the whole chunk footprint, valid without a mesh.
    #[inline]
    pub fn footprint(&self) -> Sphere {
        chunk_footprint(self.position())
    }

    pub(crate) fn mark_dirty(&mut self, remesh: bool) {
        if remesh {
            self.needs_mesh_update = true;
        }
        self.needs_collider_update = true;
    }

    pub(crate) fn rebuild_mesh(&mut self, store: &BlockStore) {
        let hood = store.neighborhood(&self.keys);
        build_chunk_mesh(&hood, &mut self.mesh);
        self.needs_mesh_update = false;
    }

    pub(crate) fn rebuild_colliders(&mut self, store: &BlockStore, claims: &mut ClaimMap) {
        let hood = store.neighborhood(&self.keys);
        let mut boxes = std::mem::take(&mut self.colliders);
        boxes.clear();
        decompose_into(&hood, claims, &mut boxes);
        self.colliders = boxes;
        self.needs_collider_update = false;
    }

    pub(crate) fn attach_body(&mut self, owner: BodyOwner, flags: u8, physics: &mut dyn PhysicsBackend) {
        let handle = physics.add_body(ChunkBody {
            owner,
            position: self.position(),
            colliders: &self.colliders,
            flags,
        });
        self.body = Some(handle);
    }

    pub(crate) fn detach_body(&mut self, physics: &mut dyn PhysicsBackend) {
        if let Some(handle) = self.body.take() {
            physics.remove_body(handle);
        }
    }
}
