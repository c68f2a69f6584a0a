use std::time::Instant;

use voxa_chunk::{CHUNK_SIZE, Neighborhood};
use voxa_geom::{Aabb, Sphere, Vec3};

use crate::ao::face_ao;
use crate::chunk::ChunkMesh;
use crate::face::Face;

const N: i32 = CHUNK_SIZE as i32;

fn elapsed_ms(start: Instant) -> u32 {
    start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Rebuilds `out` from the chunk-local region `[0, CHUNK_SIZE)³` of `hood`.
///
/// Every Solid voxel gets one quad per face whose neighbor is not Solid, so faces
/// against Empty or Obstacle cells are kept and faces between Solid cells are
/// dropped. Buffers are reused and `out.version` is bumped.
pub fn build_chunk_mesh(hood: &Neighborhood<'_>, out: &mut ChunkMesh) {
    let t0 = Instant::now();
    let quads_before = out.build.quad_count();
    out.build.clear_keep_capacity();
    out.build.reserve_quads(quads_before);

    let mut lo = Vec3::splat(f32::MAX);
    let mut hi = Vec3::splat(f32::MIN);
    let mut any_visible = false;

    for z in 0..N {
        for y in 0..N {
            for x in 0..N {
                let voxel = hood.voxel_at(x, y, z);
                if !voxel.kind.is_solid() {
                    continue;
                }
                let rgb = voxel.color.to_linear();
                let mut visible = false;
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    if hood.is_solid(x + dx, y + dy, z + dz) {
                        continue;
                    }
                    let ao = face_ao(hood, x, y, z, face);
                    out.build.add_face(face, x, y, z, rgb, ao);
                    visible = true;
                }
                if visible {
                    any_visible = true;
                    lo = lo.min(Vec3::from_grid(x, y, z));
                    hi = hi.max(Vec3::from_grid(x + 1, y + 1, z + 1));
                }
            }
        }
    }

    if any_visible {
        out.local_bbox = Aabb::new(lo, hi);
        out.bounds = out.local_bbox.bounding_sphere().translated(out.position);
    } else {
        out.local_bbox = Aabb::default();
        out.bounds = Sphere::new(out.position, 0.0);
    }
    out.version = out.version.wrapping_add(1);

    log::info!(
        target: "perf",
        "ms={} mesher_build pos=({}, {}, {}) quads={} version={}",
        elapsed_ms(t0),
        out.position.x,
        out.position.y,
        out.position.z,
        out.build.quad_count(),
        out.version
    );
}
