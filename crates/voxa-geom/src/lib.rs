//! Small geometry kit shared by the voxel crates: vectors, bounds, and frustum culling.
#![forbid(unsafe_code)]

mod bounds;
mod frustum;
mod vec3;

pub use bounds::{Aabb, Sphere};
pub use frustum::{Frustum, Mat4, Plane};
pub use vec3::Vec3;
