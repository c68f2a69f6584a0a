use proptest::prelude::*;
use voxa_blocks::{Voxel, VoxelKind};
use voxa_chunk::{BlockCoord, BlockStore, CHUNK_SIZE, HALF_CHUNK};
use voxa_geom::Vec3;
use voxa_mesh_cpu::{ChunkMesh, Face, build_chunk_mesh};

const N: i32 = CHUNK_SIZE as i32;

// Local cells around the chunk footprint, including the one-voxel apron.
fn cells() -> impl Strategy<Value = Vec<(i32, i32, i32, u8)>> {
    prop::collection::vec((-1..=N, -1..=N, -1..=N, 0u8..3), 0..200)
}

fn fill(cells: &[(i32, i32, i32, u8)]) -> BlockStore {
    let mut store = BlockStore::new();
    for &(x, y, z, k) in cells {
        let v = Voxel::new(VoxelKind::from_raw(k), 90, 140, 200);
        store.set_voxel(x - HALF_CHUNK, y - HALF_CHUNK, z - HALF_CHUNK, v);
    }
    store
}

fn build(store: &mut BlockStore) -> ChunkMesh {
    let keys = store.neighbor_keys(BlockCoord::new(0, 0, 0));
    let hood = store.neighborhood(&keys);
    let mut mesh = ChunkMesh::new(Vec3::splat(-(HALF_CHUNK as f32)));
    build_chunk_mesh(&hood, &mut mesh);
    mesh
}

proptest! {
    // One quad per (Solid voxel, face) pair whose neighbor is not Solid; nothing else.
    #[test]
    fn quads_match_exposed_faces(cells in cells()) {
        let mut store = fill(&cells);
        let solid = |s: &BlockStore, x: i32, y: i32, z: i32| {
            s.voxel(x - HALF_CHUNK, y - HALF_CHUNK, z - HALF_CHUNK).kind.is_solid()
        };
        let mut want = 0usize;
        for z in 0..N { for y in 0..N { for x in 0..N {
            if !solid(&store, x, y, z) { continue; }
            for face in Face::ALL {
                let (dx, dy, dz) = face.delta();
                if !solid(&store, x + dx, y + dy, z + dz) { want += 1; }
            }
        }}}
        let mesh = build(&mut store);
        prop_assert_eq!(mesh.quad_count(), want);
        prop_assert_eq!(mesh.is_valid(), want > 0);
    }

    // AO only takes the quantized levels and every index addresses a real vertex.
    #[test]
    fn buffers_are_well_formed(cells in cells()) {
        let mut store = fill(&cells);
        let mesh = build(&mut store);
        let b = &mesh.build;
        let verts = b.vertex_count();
        prop_assert_eq!(b.norm.len(), verts * 3);
        prop_assert_eq!(b.uv.len(), verts * 2);
        prop_assert_eq!(b.col.len(), verts * 4);
        prop_assert_eq!(b.ao.len(), verts);
        prop_assert_eq!(b.idx.len() * 4, verts * 6);
        for a in &b.ao {
            prop_assert!([0.0f32, 0.2, 0.4, 0.6].iter().any(|l| (a - l).abs() < 1e-6), "ao {}", a);
        }
        prop_assert!(b.idx.iter().all(|i| (*i as usize) < verts));
    }

    // Every vertex stays inside the tight local bounds and the sphere encloses them.
    #[test]
    fn bounds_enclose_vertices(cells in cells()) {
        let mut store = fill(&cells);
        let mesh = build(&mut store);
        prop_assume!(mesh.is_valid());
        let bb = mesh.local_bbox;
        for p in mesh.build.pos.chunks(3) {
            let v = Vec3::new(p[0], p[1], p[2]);
            prop_assert!(v.x >= bb.min.x && v.x <= bb.max.x);
            prop_assert!(v.y >= bb.min.y && v.y <= bb.max.y);
            prop_assert!(v.z >= bb.min.z && v.z <= bb.max.z);
            let world = v + mesh.position;
            prop_assert!(world.distance(mesh.bounds.center) <= mesh.bounds.radius + 1e-4);
        }
    }
}
