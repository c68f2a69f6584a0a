use voxa_chunk::CHUNK_SIZE;
use voxa_geom::{Aabb, Sphere, Vec3};

use crate::mesh_build::MeshBuild;

/// Surface mesh of one chunk view. Vertex positions are chunk-local; `position`
/// translates them into world space.
#[derive(Default, Clone, Debug)]
pub struct ChunkMesh {
    pub build: MeshBuild,
    pub position: Vec3,
    /// Tight box around the visible voxels, chunk-local.
    pub local_bbox: Aabb,
    /// Bounding sphere of the visible voxels, world space.
    pub bounds: Sphere,
    /// Bumped on every rebuild so renderers know when to re-upload.
    pub version: u64,
}

impl ChunkMesh {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// A mesh with no visible faces is never drawn or frustum-tested.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bounds.radius > 0.0 && !self.build.idx.is_empty()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.build.quad_count()
    }
}

/// Sphere enclosing the whole `CHUNK_SIZE³` footprint of a chunk at `position`.
/// Used to cull a chunk before its mesh exists.
#[inline]
pub fn chunk_footprint(position: Vec3) -> Sphere {
    let size = Vec3::splat(CHUNK_SIZE as f32);
    Aabb::new(position, position + size).bounding_sphere()
}
