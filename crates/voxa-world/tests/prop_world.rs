use proptest::prelude::*;
use voxa_blocks::{Voxel, VoxelKind};
use voxa_chunk::{BlockCoord, CHUNK_SIZE};
use voxa_world::World;

const N: i32 = CHUNK_SIZE as i32;

fn coord() -> impl Strategy<Value = i32> {
    -40i32..=40
}

fn kind() -> impl Strategy<Value = VoxelKind> {
    (0u8..3).prop_map(VoxelKind::from_raw)
}

proptest! {
    // Last write wins for any sequence of writes.
    #[test]
    fn last_write_wins(writes in prop::collection::vec((coord(), coord(), coord(), kind(), any::<u8>()), 1..60)) {
        let mut world = World::new();
        for &(x, y, z, k, c) in &writes {
            world.set(x, y, z, k, c, c, c);
        }
        for (i, &(x, y, z, _, _)) in writes.iter().enumerate() {
            let last = writes[i..].iter().rev().find(|w| (w.0, w.1, w.2) == (x, y, z)).map(|w| w.3);
            prop_assert_eq!(Some(world.get(x, y, z).kind), last);
        }
    }

    // A write flags exactly the chunk views whose apron-extended region holds it.
    #[test]
    fn writes_flag_every_view_that_sees_them(
        x in coord(), y in coord(), z in coord(),
        seed in prop::collection::vec((coord(), coord(), coord()), 0..8),
    ) {
        let mut world = World::new();
        for &(sx, sy, sz) in &seed {
            world.set(sx, sy, sz, VoxelKind::Solid, 1, 1, 1);
        }
        world.rebuild_dirty();
        world.set(x, y, z, VoxelKind::Solid, 9, 9, 9);

        let sees = |c: &BlockCoord| {
            let (ox, oy, oz) = c.origin();
            let within = |v: i32, o: i32| v >= o - N / 2 - 1 && v <= o + N / 2;
            within(x, ox) && within(y, oy) && within(z, oz)
        };
        let mut flagged = 0;
        for (c, chunk) in world.chunks() {
            prop_assert_eq!(chunk.needs_collider_update(), sees(&c), "chunk {:?}", c);
            prop_assert_eq!(chunk.needs_mesh_update(), sees(&c));
            flagged += sees(&c) as usize;
        }
        prop_assert!((1..=8).contains(&flagged));
        prop_assert_eq!(world.get(x, y, z), Voxel::solid(9, 9, 9));
    }

    // Any two cells of a flat N x N platform are connected, and every waypoint
    // stands on Solid with `height` Empty cells above it.
    #[test]
    fn platform_cells_are_mutually_reachable(
        from in (0..N, 0..N), to in (0..N, 0..N), height in 1u32..=3,
    ) {
        let mut world = World::new();
        for z in 0..N {
            for x in 0..N {
                world.set(x, 0, z, VoxelKind::Solid, 70, 70, 70);
            }
        }
        let path = world.pathfind((from.0, 1, from.1), (to.0, 1, to.1), height);
        prop_assert!(!path.is_empty());
        let pts: Vec<(i32, i32, i32)> = path.chunks(3).map(|c| (c[0], c[1], c[2])).collect();
        prop_assert_eq!(pts.first(), Some(&(from.0, 1, from.1)));
        prop_assert_eq!(pts.last(), Some(&(to.0, 1, to.1)));
        for &(x, y, z) in &pts {
            prop_assert!(world.test(x, y - 1, z, VoxelKind::Solid), "no floor under ({}, {}, {})", x, y, z);
            for dy in 0..height as i32 {
                prop_assert!(world.is_empty(x, y + dy, z), "no headroom at ({}, {}, {})", x, y, z);
            }
        }
        for w in pts.windows(2) {
            let (a, b) = (w[0], w[1]);
            prop_assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1 && (a.2 - b.2).abs() <= 1);
        }
    }
}
