use std::time::Instant;

use voxa_chunk::{CHUNK_SIZE, Neighborhood};
use voxa_geom::{Aabb, Vec3};

use crate::claim::ClaimMap;

const N: usize = CHUNK_SIZE;

/// Axis-aligned run of voxels in chunk-local grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VoxelBox {
    pub origin: [usize; 3],
    pub size: [usize; 3],
}

impl VoxelBox {
    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.origin[0] as f32 + self.size[0] as f32 * 0.5,
            self.origin[1] as f32 + self.size[1] as f32 * 0.5,
            self.origin[2] as f32 + self.size[2] as f32 * 0.5,
        )
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(
            self.size[0] as f32 * 0.5,
            self.size[1] as f32 * 0.5,
            self.size[2] as f32 * 0.5,
        )
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.center(), self.half_extents())
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.size[0] * self.size[1] * self.size[2]
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        let p = [x, y, z];
        (0..3).all(|a| p[a] >= self.origin[a] && p[a] < self.origin[a] + self.size[a])
    }
}

struct Scan<'h, 'a> {
    hood: &'h Neighborhood<'a>,
    claims: &'h mut ClaimMap,
}

impl Scan<'_, '_> {
    #[inline]
    fn free(&self, x: usize, y: usize, z: usize) -> bool {
        !self.claims.is_claimed(x, y, z)
            && self
                .hood
                .voxel_at(x as i32, y as i32, z as i32)
                .kind
                .is_collidable()
    }

    fn run_z(&self, x: usize, y: usize, z: usize) -> usize {
        (z..N).take_while(|&zz| self.free(x, y, zz)).count()
    }

    fn run_y(&self, x: usize, y: usize, z: usize) -> usize {
        (y..N).take_while(|&yy| self.free(x, yy, z)).count()
    }

    fn run_x(&self, x: usize, y: usize, z: usize) -> usize {
        (x..N).take_while(|&xx| self.free(xx, y, z)).count()
    }

    /// Grows a box from `(x, y, z)`: depth along Z first, then the height every
    /// cell of that Z-run supports, then the width every cell of the Y×Z slab supports.
    fn grow(&self, x: usize, y: usize, z: usize) -> VoxelBox {
        let depth = self.run_z(x, y, z);
        let height = (z..z + depth)
            .map(|zz| self.run_y(x, y, zz))
            .min()
            .unwrap_or(1);
        let mut width = N - x;
        for zz in z..z + depth {
            for yy in y..y + height {
                width = width.min(self.run_x(x, yy, zz));
            }
        }
        VoxelBox {
            origin: [x, y, z],
            size: [width, height, depth],
        }
    }

    fn claim(&mut self, b: &VoxelBox) {
        for zz in b.origin[2]..b.origin[2] + b.size[2] {
            for yy in b.origin[1]..b.origin[1] + b.size[1] {
                for xx in b.origin[0]..b.origin[0] + b.size[0] {
                    self.claims.claim(xx, yy, zz);
                }
            }
        }
    }
}

/// Covers every non-Empty voxel in the chunk-local region `[0, CHUNK_SIZE)³` with
/// non-overlapping boxes, appending them to `out`. `claims` is cleared first.
pub fn decompose_into(hood: &Neighborhood<'_>, claims: &mut ClaimMap, out: &mut Vec<VoxelBox>) {
    let t0 = Instant::now();
    claims.clear();
    let first = out.len();
    let mut scan = Scan { hood, claims };
    for z in 0..N {
        for y in 0..N {
            for x in 0..N {
                if !scan.free(x, y, z) {
                    continue;
                }
                let b = scan.grow(x, y, z);
                scan.claim(&b);
                out.push(b);
            }
        }
    }
    log::info!(
        target: "perf",
        "ms={} collider_build boxes={} voxels={}",
        t0.elapsed().as_millis(),
        out.len() - first,
        scan.claims.claimed_count()
    );
}

pub fn decompose(hood: &Neighborhood<'_>, claims: &mut ClaimMap) -> Vec<VoxelBox> {
    let mut out = Vec::new();
    decompose_into(hood, claims, &mut out);
    out
}
