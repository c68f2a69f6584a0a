use serde::{Deserialize, Serialize};

/// Display-space (gamma encoded) 8-bit color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear-light channels in `[0, 1]`.
    #[inline]
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }
}

/// Standard sRGB electro-optical transfer for one 8-bit channel.
#[inline]
pub fn srgb_to_linear(c: u8) -> f32 {
    let n = c as f32 / 255.0;
    if n < 0.04045 {
        n * 0.077_399_38
    } else {
        (n * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn mid_grey_matches_reference() {
        // 0.5 display ≈ 0.214 linear
        assert!((srgb_to_linear(128) - 0.2158).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn transfer_is_monotonic(c in 0u8..255) {
            prop_assert!(srgb_to_linear(c) <= srgb_to_linear(c + 1));
            prop_assert!(srgb_to_linear(c) <= c as f32 / 255.0 + 1e-6);
        }
    }
}
