use voxa_geom::Vec3;

use crate::ao::flip_diagonal;
use crate::constants::{OPAQUE_ALPHA, QUAD_CORNERS, QUAD_INDICES, QUAD_INDICES_FLIPPED};
use crate::face::Face;

/// Flat vertex/index buffers ready for upload. Colors are linear RGBA with AO
/// already multiplied in; `ao` keeps the raw per-vertex factor.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub col: Vec<f32>,
    pub ao: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.col.clear();
        self.ao.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.col.reserve(n_quads * 4 * 4);
        self.ao.reserve(n_quads * 4);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Appends one unit quad on `face` of the voxel whose minimum corner is `(x, y, z)`.
    ///
    /// `rgb` is the voxel's linear color; `ao` holds one occlusion factor per corner
    /// in [`QUAD_CORNERS`] order.
    pub fn add_face(&mut self, face: Face, x: i32, y: i32, z: i32, rgb: [f32; 3], ao: [f32; 4]) {
        let base = self.vertex_count() as u32;
        let n = face.normal();
        let ((ux, uy, uz), (vx, vy, vz)) = face.tangents();
        let u = Vec3::from_grid(ux, uy, uz);
        let v = Vec3::from_grid(vx, vy, vz);
        let center = Vec3::from_grid(x, y, z) + Vec3::splat(0.5) + n * 0.5;

        for (i, &(su, sv, tu, tv)) in QUAD_CORNERS.iter().enumerate() {
            let p = center + u * (0.5 * su as f32) + v * (0.5 * sv as f32);
            let shade = 1.0 - ao[i];
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[tu, tv]);
            self.col
                .extend_from_slice(&[rgb[0] * shade, rgb[1] * shade, rgb[2] * shade, OPAQUE_ALPHA]);
            self.ao.push(ao[i]);
        }

        let order = if flip_diagonal(ao) {
            &QUAD_INDICES_FLIPPED
        } else {
            &QUAD_INDICES
        };
        self.idx.extend(order.iter().map(|i| base + i));
    }
}
