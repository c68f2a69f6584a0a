use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// What occupies a voxel cell.
///
/// `Obstacle` is an invisible wall: it is never meshed and never counts as ground,
/// but it blocks movement and receives a collision box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum VoxelKind {
    #[default]
    Empty = 0,
    Solid = 1,
    Obstacle = 2,
}

impl VoxelKind {
    /// Maps a raw tag onto a kind, clamping anything past the last variant to `Obstacle`.
    #[inline]
    pub fn from_raw(raw: u8) -> VoxelKind {
        match raw {
            0 => VoxelKind::Empty,
            1 => VoxelKind::Solid,
            _ => VoxelKind::Obstacle,
        }
    }

    #[inline]
    pub fn raw(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, VoxelKind::Empty)
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, VoxelKind::Solid)
    }

    /// Anything but `Empty` takes part in collision.
    #[inline]
    pub fn is_collidable(self) -> bool {
        !self.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voxel {
    pub kind: VoxelKind,
    pub color: Rgb,
}

impl Voxel {
    pub const EMPTY: Voxel = Voxel {
        kind: VoxelKind::Empty,
        color: Rgb::BLACK,
    };

    #[inline]
    pub const fn new(kind: VoxelKind, r: u8, g: u8, b: u8) -> Self {
        Self {
            kind,
            color: Rgb::new(r, g, b),
        }
    }

    #[inline]
    pub const fn solid(r: u8, g: u8, b: u8) -> Self {
        Self::new(VoxelKind::Solid, r, g, b)
    }

    #[inline]
    pub const fn obstacle() -> Self {
        Self::new(VoxelKind::Obstacle, 0, 0, 0)
    }

    #[inline]
    pub fn is(&self, kind: VoxelKind) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_tags_round_trip_and_clamp() {
        for kind in [VoxelKind::Empty, VoxelKind::Solid, VoxelKind::Obstacle] {
            assert_eq!(VoxelKind::from_raw(kind.raw()), kind);
        }
        assert_eq!(VoxelKind::from_raw(200), VoxelKind::Obstacle);
    }

    #[test]
    fn default_voxel_is_empty_black() {
        assert_eq!(Voxel::default(), Voxel::EMPTY);
        assert!(Voxel::default().is(VoxelKind::Empty));
    }

    #[test]
    fn kinds_deserialize_from_lowercase_names() {
        #[derive(serde::Deserialize)]
        struct Holder {
            kind: VoxelKind,
        }
        let h: Holder = toml::from_str("kind = \"obstacle\"").unwrap();
        assert_eq!(h.kind, VoxelKind::Obstacle);
    }
}
