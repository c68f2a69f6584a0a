use voxa_chunk::Neighborhood;

use crate::constants::{AO_STEP, QUAD_CORNERS};
use crate::face::Face;

/// Occlusion for one corner from its two edge samples and the diagonal sample.
/// The diagonal only contributes when at most one edge is occluded.
#[inline]
pub fn vertex_ao(edge1: bool, edge2: bool, corner: bool) -> f32 {
    let mut ao = 0.0;
    if edge1 {
        ao += AO_STEP;
    }
    if edge2 {
        ao += AO_STEP;
    }
    if corner && !(edge1 && edge2) {
        ao += AO_STEP;
    }
    ao
}

/// Per-corner occlusion for `face` of the voxel at chunk-local `(x, y, z)`.
/// Samples the layer of cells directly in front of the face.
pub fn face_ao(hood: &Neighborhood<'_>, x: i32, y: i32, z: i32, face: Face) -> [f32; 4] {
    let (dx, dy, dz) = face.delta();
    let ((ux, uy, uz), (vx, vy, vz)) = face.tangents();
    let (nx, ny, nz) = (x + dx, y + dy, z + dz);
    let mut out = [0.0; 4];
    for (slot, &(su, sv, _, _)) in out.iter_mut().zip(QUAD_CORNERS.iter()) {
        let (ox, oy, oz) = (ux * su, uy * su, uz * su);
        let (px, py, pz) = (vx * sv, vy * sv, vz * sv);
        let e1 = hood.is_solid(nx + ox, ny + oy, nz + oz);
        let e2 = hood.is_solid(nx + px, ny + py, nz + pz);
        let c = hood.is_solid(nx + ox + px, ny + oy + py, nz + oz + pz);
        *slot = vertex_ao(e1, e2, c);
    }
    out
}

/// Whether the quad should be split along the 2-1 diagonal to keep AO gradients
/// from creasing.
#[inline]
pub fn flip_diagonal(ao: [f32; 4]) -> bool {
    ao[2] + ao[1] > ao[3] + ao[0]
}
