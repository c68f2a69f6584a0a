use hashbrown::HashMap;
use voxa_blocks::VoxelKind;
use voxa_chunk::BlockCoord;
use voxa_geom::Vec3;
use voxa_world::{BodyHandle, BodyOwner, ChunkBody, PhysicsBackend, World, WorldConfig};

#[derive(Default)]
struct MockPhysics {
    next: u64,
    live: HashMap<BodyHandle, (BodyOwner, usize, u8)>,
    added: usize,
    removed: usize,
}

impl PhysicsBackend for MockPhysics {
    fn add_body(&mut self, body: ChunkBody<'_>) -> BodyHandle {
        self.next += 1;
        let handle = BodyHandle(self.next);
        self.live
            .insert(handle, (body.owner, body.colliders.len(), body.flags));
        self.added += 1;
        handle
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        assert!(self.live.remove(&handle).is_some(), "double remove {handle:?}");
        self.removed += 1;
    }
}

fn world_with_voxel() -> World {
    let mut world = World::new();
    world.set(5, 5, 5, VoxelKind::Solid, 255, 0, 0);
    world
}

#[test]
fn enable_is_idempotent() {
    let mut world = world_with_voxel();
    let mut physics = MockPhysics::default();
    world.enable_physics(&mut physics);
    world.enable_physics(&mut physics);
    assert_eq!(physics.added, 1);
    assert_eq!(physics.live.len(), world.stats().bodies);

    let chunk = world.chunk(BlockCoord::new(0, 0, 0)).unwrap();
    assert!(!chunk.needs_collider_update());
    let (owner, boxes, _) = physics.live[&chunk.body().unwrap()];
    assert_eq!(boxes, 1);
    assert!(world.owns(&owner));
}

#[test]
fn disable_is_idempotent() {
    let mut world = world_with_voxel();
    let mut physics = MockPhysics::default();
    world.disable_physics(&mut physics);
    assert_eq!(physics.removed, 0);

    world.enable_physics(&mut physics);
    world.disable_physics(&mut physics);
    world.disable_physics(&mut physics);
    assert_eq!(physics.removed, 1);
    assert!(physics.live.is_empty());
    assert_eq!(world.stats().bodies, 0);
    assert!(!world.physics_enabled());
}

#[test]
fn step_swaps_bodies_of_edited_chunks() {
    let mut world = world_with_voxel();
    let mut physics = MockPhysics::default();
    world.enable_physics(&mut physics);
    world.step_physics(&mut physics);
    assert_eq!((physics.added, physics.removed), (1, 0));

    world.set(6, 5, 5, VoxelKind::Solid, 255, 0, 0);
    world.step_physics(&mut physics);
    assert_eq!((physics.added, physics.removed), (2, 1));
    let chunk = world.chunk(BlockCoord::new(0, 0, 0)).unwrap();
    let (_, boxes, _) = physics.live[&chunk.body().unwrap()];
    assert_eq!(boxes, 1);
    assert_eq!(chunk.colliders()[0].size, [2, 1, 1]);
}

#[test]
fn chunks_created_while_enabled_get_bodies_on_step() {
    let mut world = world_with_voxel();
    let mut physics = MockPhysics::default();
    world.enable_physics(&mut physics);
    world.set(40, 40, 40, VoxelKind::Solid, 1, 1, 1);
    assert_eq!(world.stats().bodies, 1);
    world.step_physics(&mut physics);
    assert_eq!(world.stats().bodies, world.stats().chunks);
    assert_eq!(physics.live.len(), world.stats().chunks);
}

#[test]
fn step_does_nothing_while_disabled() {
    let mut world = world_with_voxel();
    let mut physics = MockPhysics::default();
    world.step_physics(&mut physics);
    assert_eq!(physics.added, 0);
}

#[test]
fn configured_physics_attaches_on_first_step() {
    let mut world = World::with_config(WorldConfig {
        physics_enabled: true,
        ..WorldConfig::default()
    });
    world.set(1, 1, 1, VoxelKind::Solid, 1, 1, 1);
    let mut physics = MockPhysics::default();
    world.step_physics(&mut physics);
    assert_eq!(physics.added, world.stats().chunks);
}

#[test]
fn ownership_is_per_world() {
    let mut a = world_with_voxel();
    let b = world_with_voxel();
    let mut physics = MockPhysics::default();
    a.set_flags(3);
    a.enable_physics(&mut physics);
    let (owner, _, flags) = *physics.live.values().next().unwrap();
    assert_eq!(flags, 3);
    assert!(a.owns(&owner));
    assert!(!b.owns(&owner));
    assert!(!a.owns(&BodyOwner::Mesh(7)));
    assert!(!a.owns(&BodyOwner::VoxelChunk {
        world: a.id(),
        chunk: BlockCoord::new(99, 99, 99)
    }));
}

#[test]
fn release_hands_back_every_body() {
    let mut world = world_with_voxel();
    world.set(8, 8, 8, VoxelKind::Solid, 1, 1, 1);
    let mut physics = MockPhysics::default();
    world.enable_physics(&mut physics);
    assert_eq!(physics.live.len(), world.stats().chunks);
    world.release_physics(&mut physics);
    assert!(physics.live.is_empty());
    assert!(world.physics_enabled());
}

#[test]
fn bulk_rebuild_leaves_body_swap_to_step() {
    let mut world = world_with_voxel();
    let mut physics = MockPhysics::default();
    world.enable_physics(&mut physics);

    world.set(1, 1, 1, VoxelKind::Solid, 0, 255, 0);
    world.rebuild_dirty();
    let chunk = world.chunk(BlockCoord::new(0, 0, 0)).unwrap();
    assert!(chunk.needs_collider_update());
    assert!(!chunk.needs_mesh_update());

    world.step_physics(&mut physics);
    let chunk = world.chunk(BlockCoord::new(0, 0, 0)).unwrap();
    assert!(!chunk.needs_collider_update());
    let (_, boxes, _) = physics.live[&chunk.body().unwrap()];
    assert_eq!(chunk.colliders().len(), 2);
    assert_eq!(boxes, chunk.colliders().len());
    assert_eq!((physics.added, physics.removed), (2, 1));
}

#[test]
fn bulk_rebuild_still_builds_colliders_without_bodies() {
    let mut world = world_with_voxel();
    let stats = world.rebuild_dirty();
    assert_eq!(stats.colliders, world.stats().chunks);
    let chunk = world.chunk(BlockCoord::new(0, 0, 0)).unwrap();
    assert!(!chunk.needs_collider_update());
    assert_eq!(chunk.colliders().len(), 1);
    let bounds = chunk.colliders()[0].aabb().translated(chunk.position());
    assert_eq!(bounds.min, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(bounds.max, Vec3::new(6.0, 6.0, 6.0));
}
