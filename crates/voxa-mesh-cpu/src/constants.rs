//! Shared constants for voxa-mesh-cpu.

// AO darkening per occluding sample
pub(crate) const AO_STEP: f32 = 0.2;

pub(crate) const OPAQUE_ALPHA: f32 = 1.0;

// Triangle orders for one quad, relative to its first vertex. The second set
// splits the quad along the other diagonal.
pub(crate) const QUAD_INDICES: [u32; 6] = [0, 2, 1, 2, 3, 1];
pub(crate) const QUAD_INDICES_FLIPPED: [u32; 6] = [2, 3, 0, 3, 1, 0];

/// Quad corners as `(su, sv, u, v)`: signs along the face tangents, then texture coords.
pub(crate) const QUAD_CORNERS: [(i32, i32, f32, f32); 4] = [
    (-1, 1, 0.0, 1.0),
    (1, 1, 1.0, 1.0),
    (-1, -1, 0.0, 0.0),
    (1, -1, 1.0, 0.0),
];
