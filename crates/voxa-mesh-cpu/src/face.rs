use voxa_geom::Vec3;

/// The six faces of a voxel. Each face carries a right-handed tangent frame
/// `(u, v, normal)` with `u × v = normal`, which fixes counter-clockwise winding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosZ = 0,
    PosY = 1,
    NegY = 2,
    NegX = 3,
    PosX = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosZ,
        Face::PosY,
        Face::NegY,
        Face::NegX,
        Face::PosX,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosZ` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        Face::ALL.get(i).copied().unwrap_or(Face::PosZ)
    }

    /// Integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosZ => (0, 0, 1),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Tangent axes `(u, v)` spanning the face.
    #[inline]
    pub fn tangents(self) -> ((i32, i32, i32), (i32, i32, i32)) {
        match self {
            Face::PosZ => ((1, 0, 0), (0, 1, 0)),
            Face::PosY => ((1, 0, 0), (0, 0, -1)),
            Face::NegY => ((1, 0, 0), (0, 0, 1)),
            Face::NegX => ((0, 0, 1), (0, 1, 0)),
            Face::PosX => ((0, 0, -1), (0, 1, 0)),
            Face::NegZ => ((-1, 0, 0), (0, 1, 0)),
        }
    }

    /// Unit normal for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.delta();
        Vec3::from_grid(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_frames_are_right_handed() {
        for face in Face::ALL {
            let ((ux, uy, uz), (vx, vy, vz)) = face.tangents();
            let u = Vec3::from_grid(ux, uy, uz);
            let v = Vec3::from_grid(vx, vy, vz);
            assert_eq!(u.cross(v), face.normal(), "{face:?}");
        }
    }

    #[test]
    fn index_roundtrip() {
        for face in Face::ALL {
            assert_eq!(Face::from_index(face.index()), face);
        }
        assert_eq!(Face::from_index(17), Face::PosZ);
    }
}
