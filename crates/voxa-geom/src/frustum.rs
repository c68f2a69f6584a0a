use cgmath::{Deg, Matrix, Matrix4, Point3, Vector3, Vector4};

use crate::{Sphere, Vec3};

/// Column-major view-projection matrix with a `[-1, 1]` clip depth range.
pub type Mat4 = Matrix4<f32>;

#[inline]
fn point(v: Vec3) -> Point3<f32> {
    Point3::new(v.x, v.y, v.z)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// Builds a plane from raw `ax + by + cz + d` coefficients, normalizing them.
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Plane {
        let normal = Vec3::new(a, b, c);
        let len = normal.length();
        if len <= 0.0 {
            return Plane { normal, constant: d };
        }
        let inv = 1.0 / len;
        Plane {
            normal: normal * inv,
            constant: d * inv,
        }
    }

    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.constant
    }
}

/// Six clip planes extracted from a view-projection matrix, normals pointing inward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    pub fn from_view_projection(vp: &Mat4) -> Frustum {
        let (x, y, z, w) = (vp.row(0), vp.row(1), vp.row(2), vp.row(3));
        let plane = |r: Vector4<f32>| Plane::from_coefficients(r.x, r.y, r.z, r.w);
        Frustum {
            planes: [
                plane(w - x),
                plane(w + x),
                plane(w + y),
                plane(w - y),
                plane(w - z),
                plane(w + z),
            ],
        }
    }

    /// Convenience for a perspective camera at `eye` looking at `target` (+Y up).
    pub fn from_camera(eye: Vec3, target: Vec3, fov_y_degrees: f32, aspect: f32) -> Frustum {
        let projection = cgmath::perspective(Deg(fov_y_degrees), aspect, 0.1, 10_000.0);
        let view = Mat4::look_at_rh(point(eye), point(target), Vector3::unit_y());
        Frustum::from_view_projection(&(projection * view))
    }

    /// Conservative sphere test: false only when the sphere is fully outside a plane.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|p| p.signed_distance(sphere.center) >= -sphere.radius)
    }
}
