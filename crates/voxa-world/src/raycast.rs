use voxa_geom::Vec3;

/// First voxel a ray enters that satisfies the hit test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// The voxel that was hit.
    pub voxel: (i32, i32, i32),
    /// The cell the ray was in just before, where a placed voxel would go.
    pub previous: (i32, i32, i32),
    /// Normal of the face that was crossed, zero if the ray started inside.
    pub normal: (i32, i32, i32),
}

const MAX_STEPS: usize = 512;

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

#[inline]
fn axis_setup(origin: f32, d: f32) -> (i32, f32, f32) {
    let step = if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    };
    let inv = inv_or_max(d);
    let frac = origin - origin.floor();
    let t_delta = if step == 0 { f32::MAX } else { inv };
    let t_max = match step {
        1 => (1.0 - frac) * inv,
        -1 => frac * inv,
        _ => f32::MAX,
    };
    (step, t_delta, t_max)
}

/// Amanatides-Woo grid walk from `origin` along `dir`, up to `max_dist`.
pub fn raycast_first_hit<F>(origin: Vec3, dir: Vec3, max_dist: f32, mut is_hit: F) -> Option<RayHit>
where
    F: FnMut(i32, i32, i32) -> bool,
{
    if dir.length() < 1e-6 {
        return None;
    }
    let d = dir.normalized();

    let mut v = [
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    ];
    let axes = [
        axis_setup(origin.x, d.x),
        axis_setup(origin.y, d.y),
        axis_setup(origin.z, d.z),
    ];
    let step = axes.map(|a| a.0);
    let t_delta = axes.map(|a| a.1);
    let mut t_max = axes.map(|a| a.2);

    let mut prev = v;
    let mut t = 0.0f32;
    for _ in 0..MAX_STEPS {
        if t > max_dist {
            break;
        }
        if is_hit(v[0], v[1], v[2]) {
            let normal = (prev[0] - v[0], prev[1] - v[1], prev[2] - v[2]);
            return Some(RayHit {
                voxel: (v[0], v[1], v[2]),
                previous: (prev[0], prev[1], prev[2]),
                normal,
            });
        }
        prev = v;
        let axis = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] { 0 } else { 2 }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };
        v[axis] += step[axis];
        t = t_max[axis];
        t_max[axis] += t_delta[axis];
    }
    None
}
