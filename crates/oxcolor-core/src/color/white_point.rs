//! Reference whites
//!
//! Tristimulus values of the CIE standard illuminants for the 2° observer,
//! normalized to Y = 1 (Lindbloom's tables). A white point is only ever a
//! parameter: it tells a conversion or adaptation which "white" the values
//! are relative to.

use crate::color::Xyz;

/// A named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Illuminant name, or `"custom"`
    pub name: &'static str,
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// A measured or otherwise non-standard white
    pub const fn custom(xyz: Xyz) -> Self {
        Self {
            name: "custom",
            xyz,
        }
    }

    /// Chromaticity (x, y)
    pub fn chromaticity(&self) -> (f64, f64) {
        let (x, y, _) = self.xyz.to_xyy();
        (x, y)
    }

    /// Same tristimulus values within `epsilon`, ignoring the name
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.xyz.approx_eq(&other.xyz, epsilon)
    }
}

impl From<WhitePoint> for Xyz {
    fn from(white: WhitePoint) -> Self {
        white.xyz
    }
}

// ============================================================================
// CIE standard illuminants
// ============================================================================

/// Incandescent, ~2856K
pub const A: WhitePoint = WhitePoint::new("A", 1.09850, 1.0, 0.35585);
/// Noon sunlight (obsolete)
pub const B: WhitePoint = WhitePoint::new("B", 0.99072, 1.0, 0.85223);
/// Average daylight (obsolete); white of NTSC RGB and Hunter Lab
pub const C: WhitePoint = WhitePoint::new("C", 0.98074, 1.0, 1.18232);
/// Horizon light, ~5003K; default Lab white
pub const D50: WhitePoint = WhitePoint::new("D50", 0.96422, 1.0, 0.82521);
/// Mid-morning daylight, ~5500K
pub const D55: WhitePoint = WhitePoint::new("D55", 0.95682, 1.0, 0.92149);
/// Noon daylight, ~6504K; white of sRGB and most display spaces
pub const D65: WhitePoint = WhitePoint::new("D65", 0.95047, 1.0, 1.08883);
/// North sky daylight, ~7500K
pub const D75: WhitePoint = WhitePoint::new("D75", 0.94972, 1.0, 1.22638);
/// Equal energy
pub const E: WhitePoint = WhitePoint::new("E", 1.0, 1.0, 1.0);
/// Cool white fluorescent
pub const F2: WhitePoint = WhitePoint::new("F2", 0.99186, 1.0, 0.67393);
/// Broadband daylight fluorescent
pub const F7: WhitePoint = WhitePoint::new("F7", 0.95041, 1.0, 1.08747);
/// Narrow band white fluorescent
pub const F11: WhitePoint = WhitePoint::new("F11", 1.00962, 1.0, 0.64350);

/// Every standard illuminant above
pub const STANDARD: [WhitePoint; 11] = [A, B, C, D50, D55, D65, D75, E, F2, F7, F11];

/// Look up a standard illuminant by name, case-insensitively
pub fn from_name(name: &str) -> Option<WhitePoint> {
    STANDARD
        .into_iter()
        .find(|white| white.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lindbloom_values() {
        assert_eq!(D50.xyz, Xyz::new(0.96422, 1.0, 0.82521));
        assert_eq!(D65.xyz, Xyz::new(0.95047, 1.0, 1.08883));
    }

    #[test]
    fn test_all_normalized() {
        for white in STANDARD {
            assert_eq!(white.xyz.y, 1.0, "{} not normalized", white.name);
            assert!(white.xyz.is_positive_finite());
        }
    }

    #[test]
    fn test_chromaticity() {
        let (x, y) = D65.chromaticity();
        assert!((x - 0.3127).abs() < 0.001);
        assert!((y - 0.3290).abs() < 0.001);

        let (x, y) = E.chromaticity();
        assert!((x - 1.0 / 3.0).abs() < 1e-12);
        assert!((y - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("D50"), Some(D50));
        assert_eq!(from_name("d65"), Some(D65));
        assert_eq!(from_name(" f11 "), Some(F11));
        assert!(from_name("D93").is_none());
    }

    #[test]
    fn test_custom_compares_by_value() {
        let custom = WhitePoint::custom(D65.xyz);
        assert_ne!(custom, D65);
        assert!(custom.approx_eq(&D65, 1e-15));
        assert!(!D65.approx_eq(&D50, 0.001));
    }
}
