use std::sync::atomic::{AtomicU32, Ordering};

use hashbrown::HashMap;
use voxa_blocks::{Voxel, VoxelKind};
use voxa_chunk::{BlockCoord, BlockStore, HALF_CHUNK, split_world};
use voxa_collider::ClaimMap;
use voxa_geom::{Frustum, Vec3};
use voxa_search::{AStarSearch, SearchState};

use crate::chunk::ChunkView;
use crate::config::WorldConfig;
use crate::pathfind::{GridPos, WalkProblem};
use crate::physics::{BodyOwner, PhysicsBackend};
use crate::raycast::{RayHit, raycast_first_hit};
use crate::render::ChunkRenderer;

static NEXT_WORLD_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique world identity, used to route physics contacts back to a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(u32);

impl WorldId {
    fn next() -> Self {
        WorldId(NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    pub blocks: usize,
    pub populated_blocks: usize,
    pub chunks: usize,
    pub dirty_meshes: usize,
    pub dirty_colliders: usize,
    pub bodies: usize,
    pub quads: usize,
    pub collider_boxes: usize,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildStats {
    pub meshes: usize,
    pub colliders: usize,
}

/// Whether chunk view `n` steps past a voxel's block (per axis, `n` in {0, 1})
/// can see local block coordinate `v`, including the one-voxel apron.
#[inline]
fn view_sees(v: i32, n: i32) -> bool {
    v >= n * HALF_CHUNK - 1 && v <= (n + 1) * HALF_CHUNK
}

/// Sparse editable voxel volume with lazily rebuilt meshes and colliders.
pub struct World {
    id: WorldId,
    flags: u8,
    config: WorldConfig,
    store: BlockStore,
    chunks: HashMap<BlockCoord, ChunkView>,
    claims: ClaimMap,
    physics_enabled: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        let physics_enabled = config.physics_enabled;
        Self {
            id: WorldId::next(),
            flags: 0,
            config,
            store: BlockStore::new(),
            chunks: HashMap::new(),
            claims: ClaimMap::new(),
            physics_enabled,
        }
    }

    #[inline]
    pub fn id(&self) -> WorldId {
        self.id
    }

    #[inline]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline]
    pub fn set_flags(&mut self, flags: u8) {
        self.flags = flags;
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    #[inline]
    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    pub fn chunk(&self, coord: BlockCoord) -> Option<&ChunkView> {
        self.chunks.get(&coord)
    }

    pub fn chunks(&self) -> impl Iterator<Item = (BlockCoord, &ChunkView)> {
        self.chunks.iter().map(|(k, v)| (*k, v))
    }

    pub fn stats(&self) -> WorldStats {
        let store = self.store.stats();
        let mut out = WorldStats {
            blocks: store.blocks,
            populated_blocks: store.populated_blocks,
            chunks: self.chunks.len(),
            ..WorldStats::default()
        };
        for chunk in self.chunks.values() {
            out.dirty_meshes += chunk.needs_mesh_update() as usize;
            out.dirty_colliders += chunk.needs_collider_update() as usize;
            out.bodies += chunk.body().is_some() as usize;
            out.quads += chunk.mesh().quad_count();
            out.collider_boxes += chunk.colliders().len();
        }
        out
    }

    fn ensure_chunk(&mut self, coord: BlockCoord) -> &mut ChunkView {
        let store = &mut self.store;
        self.chunks.entry(coord).or_insert_with(|| {
            log::debug!("chunk created ({}, {}, {})", coord.cx, coord.cy, coord.cz);
            ChunkView::new(coord, store.neighbor_keys(coord))
        })
    }

    /// Voxel at a world coordinate. Unwritten space reads as Empty with zero color.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.store.voxel(x, y, z)
    }

    #[inline]
    pub fn test(&self, x: i32, y: i32, z: i32, kind: VoxelKind) -> bool {
        self.get(x, y, z).kind == kind
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32, z: i32) -> bool {
        self.test(x, y, z, VoxelKind::Empty)
    }

    /// Writes a voxel and flags every chunk view that can see it.
    ///
    /// Colliders are always flagged. Meshes are not flagged when the change is
    /// between Empty and Obstacle, since neither is drawn.
    pub fn set(&mut self, x: i32, y: i32, z: i32, kind: VoxelKind, r: u8, g: u8, b: u8) {
        let prev = self.store.set_voxel(x, y, z, Voxel::new(kind, r, g, b));
        log::trace!("set ({x}, {y}, {z}) {:?} -> {:?}", prev.kind, kind);
        let remesh = !matches!(
            (prev.kind, kind),
            (VoxelKind::Empty, VoxelKind::Obstacle) | (VoxelKind::Obstacle, VoxelKind::Empty)
        );

        let (coord, local) = split_world(x, y, z);
        let (lx, ly, lz) = (local.x as i32, local.y as i32, local.z as i32);
        for nz in 0..2 {
            for ny in 0..2 {
                for nx in 0..2 {
                    if view_sees(lx, nx) && view_sees(ly, ny) && view_sees(lz, nz) {
                        self.ensure_chunk(coord.offset(nx, ny, nz)).mark_dirty(remesh);
                    }
                }
            }
        }
    }

    /// Y of the first standable cell at or below `(x, y, z)`, scanning down at most
    /// `ground_search_depth` cells for a Solid voxel with `height` Empty cells above it.
    pub fn ground(&self, x: i32, y: i32, z: i32, height: u32) -> Option<i32> {
        if !self.is_empty(x, y, z) {
            return None;
        }
        let depth = self.config.ground_search_depth as i32;
        let g = (1..=depth)
            .map(|i| y - i)
            .find(|&g| self.test(x, g, z, VoxelKind::Solid))?;
        (1..=height as i32)
            .all(|h| self.is_empty(x, g + h, z))
            .then_some(g + 1)
    }

    /// Walks from `from` to `to` for an actor `height` voxels tall.
    ///
    /// Returns the waypoints from start to goal inclusive, flattened as
    /// `[x, y, z, x, y, z, ..]`, or an empty vector when no path exists or the
    /// step budget runs out.
    pub fn pathfind(&self, from: GridPos, to: GridPos, height: u32) -> Vec<i32> {
        let budget = self.config.path_step_budget;
        let mut search =
            AStarSearch::new(WalkProblem::new(self, height, to), from).with_step_budget(budget);
        let state = search.run();
        log::debug!(
            "pathfind {:?} -> {:?} height={} {:?} expanded={}",
            from,
            to,
            height,
            state,
            search.expanded()
        );
        if search.budget_exhausted() {
            log::warn!(
                "pathfind {:?} -> {:?} gave up after {} expanded nodes",
                from,
                to,
                budget
            );
        }
        if state != SearchState::Succeeded {
            return Vec::new();
        }
        search
            .solution()
            .map(|nodes| nodes.into_iter().flat_map(|(x, y, z)| [x, y, z]).collect())
            .unwrap_or_default()
    }

    /// First Solid voxel along a ray. Obstacles are invisible to picking.
    pub fn raycast(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
        raycast_first_hit(origin, dir, max_dist, |x, y, z| {
            self.test(x, y, z, VoxelKind::Solid)
        })
    }

    /// Rebuilds every dirty mesh and collider list, regardless of visibility.
    ///
    /// Chunks holding a physics body keep their collider flag set: the rebuild
    /// and body swap happen together in [`World::step_physics`].
    pub fn rebuild_dirty(&mut self) -> RebuildStats {
        let mut stats = RebuildStats::default();
        for chunk in self.chunks.values_mut() {
            if chunk.needs_mesh_update() {
                chunk.rebuild_mesh(&self.store);
                stats.meshes += 1;
            }
            if chunk.needs_collider_update() && chunk.body().is_none() {
                chunk.rebuild_colliders(&self.store, &mut self.claims);
                stats.colliders += 1;
            }
        }
        stats
    }

    /// Draws every chunk whose bounds pass the frustum test and returns how many
    /// were drawn.
    ///
    /// A dirty chunk is first tested with its whole footprint; only if that
    /// passes is its mesh rebuilt, so off-screen edits cost nothing here.
    pub fn render(&mut self, frustum: &Frustum, renderer: &mut dyn ChunkRenderer) -> usize {
        let mut drawn = 0;
        for (coord, chunk) in self.chunks.iter_mut() {
            if chunk.needs_mesh_update() {
                if !frustum.intersects_sphere(&chunk.footprint()) {
                    continue;
                }
                chunk.rebuild_mesh(&self.store);
            }
            let mesh = chunk.mesh();
            if !mesh.is_valid() || !frustum.intersects_sphere(&mesh.bounds) {
                continue;
            }
            renderer.draw_chunk(*coord, mesh);
            drawn += 1;
        }
        drawn
    }

    fn owner_of(&self, coord: BlockCoord) -> BodyOwner {
        BodyOwner::VoxelChunk {
            world: self.id,
            chunk: coord,
        }
    }

    /// Gives every chunk without a body one, rebuilding stale colliders first.
    /// Calling it again is a no-op.
    pub fn enable_physics(&mut self, physics: &mut dyn PhysicsBackend) {
        self.physics_enabled = true;
        let (id, flags) = (self.id, self.flags);
        for (coord, chunk) in self.chunks.iter_mut() {
            if chunk.body().is_some() {
                continue;
            }
            if chunk.needs_collider_update() {
                chunk.rebuild_colliders(&self.store, &mut self.claims);
            }
            let owner = BodyOwner::VoxelChunk {
                world: id,
                chunk: *coord,
            };
            chunk.attach_body(owner, flags, physics);
        }
        log::debug!("physics enabled world={} chunks={}", id.get(), self.chunks.len());
    }

    /// Removes every chunk body. Calling it again is a no-op.
    pub fn disable_physics(&mut self, physics: &mut dyn PhysicsBackend) {
        if !self.physics_enabled {
            return;
        }
        self.release_physics(physics);
        self.physics_enabled = false;
        log::debug!("physics disabled world={}", self.id.get());
    }

    /// Hands every body back to the backend without changing the enabled flag.
    /// Call before dropping a world whose chunks still hold bodies.
    pub fn release_physics(&mut self, physics: &mut dyn PhysicsBackend) {
        for chunk in self.chunks.values_mut() {
            chunk.detach_body(physics);
        }
    }

    /// Per-tick physics sync: chunks created since physics was enabled get a body,
    /// and chunks with stale colliders have them rebuilt and their body swapped.
    pub fn step_physics(&mut self, physics: &mut dyn PhysicsBackend) {
        if !self.physics_enabled {
            return;
        }
        let flags = self.flags;
        let coords: Vec<BlockCoord> = self
            .chunks
            .iter()
            .filter(|(_, c)| c.body().is_none() || c.needs_collider_update())
            .map(|(k, _)| *k)
            .collect();
        for coord in coords {
            let owner = self.owner_of(coord);
            let Some(chunk) = self.chunks.get_mut(&coord) else {
                continue;
            };
            if chunk.needs_collider_update() {
                chunk.rebuild_colliders(&self.store, &mut self.claims);
            }
            if chunk.body().is_some() {
                log::debug!(
                    "body swap ({}, {}, {}) boxes={}",
                    coord.cx,
                    coord.cy,
                    coord.cz,
                    chunk.colliders().len()
                );
            }
            chunk.detach_body(physics);
            chunk.attach_body(owner, flags, physics);
        }
    }

    /// Whether a physics body tag refers to one of this world's chunks.
    pub fn owns(&self, owner: &BodyOwner) -> bool {
        match owner {
            BodyOwner::VoxelChunk { world, chunk } => {
                *world == self.id && self.chunks.contains_key(chunk)
            }
            BodyOwner::Mesh(_) => false,
        }
    }
}
