//! RGB working spaces
//!
//! A working space is a set of primaries, a reference white and a
//! companding curve. The linear-RGB→XYZ matrix is derived from the
//! primaries and white using Lindbloom's method: the columns are the XYZ
//! of each primary at unit luminance, scaled so that RGB (1, 1, 1) lands
//! exactly on the white point.

use crate::color::white_point::{C, D50, D65, E};
use crate::color::{Companding, WhitePoint};
use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// CIE xy chromaticity of a primary
pub type Chromaticity = (f64, f64);

/// Chromaticities of the red, green and blue primaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbPrimaries {
    pub r: Chromaticity,
    pub g: Chromaticity,
    pub b: Chromaticity,
}

impl RgbPrimaries {
    pub const fn new(r: Chromaticity, g: Chromaticity, b: Chromaticity) -> Self {
        Self { r, g, b }
    }
}

/// XYZ of a primary with Y = 1
#[inline]
const fn primary_xyz((x, y): Chromaticity) -> [f64; 3] {
    [x / y, 1.0, (1.0 - x - y) / y]
}

/// An RGB color space definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbWorkingSpace {
    /// Reference white
    pub white_point: WhitePoint,
    /// Transfer function between companded and linear values
    pub companding: Companding,
    /// Primaries chromaticities
    pub primaries: RgbPrimaries,
}

impl RgbWorkingSpace {
    pub const fn new(
        white_point: WhitePoint,
        companding: Companding,
        primaries: RgbPrimaries,
    ) -> Self {
        Self {
            white_point,
            companding,
            primaries,
        }
    }

    /// Columns of unit-luminance primary XYZ values
    const fn primaries_matrix(&self) -> Matrix3x3 {
        let p = &self.primaries;
        Matrix3x3::from_columns(primary_xyz(p.r), primary_xyz(p.g), primary_xyz(p.b))
    }

    /// Scale each primary column so that RGB (1, 1, 1) maps to the white
    const fn scaled_primaries(&self, primaries_inverse: &Matrix3x3) -> Matrix3x3 {
        let p = self.primaries_matrix().m;
        let s = primaries_inverse.multiply_vec(self.white_point.xyz.to_array());

        Matrix3x3::new([
            [p[0][0] * s[0], p[0][1] * s[1], p[0][2] * s[2]],
            [p[1][0] * s[0], p[1][1] * s[1], p[1][2] * s[2]],
            [p[2][0] * s[0], p[2][1] * s[1], p[2][2] * s[2]],
        ])
    }

    /// Linear RGB → XYZ matrix
    ///
    /// Fails with [`Error::SingularMatrix`] when the primaries are collinear
    /// or degenerate (a primary with y = 0).
    pub fn to_xyz_matrix(&self) -> Result<Matrix3x3> {
        let inv = self
            .primaries_matrix()
            .inverse()
            .ok_or(Error::SingularMatrix("working space primaries"))?;
        Ok(self.scaled_primaries(&inv))
    }

    /// [`to_xyz_matrix`](Self::to_xyz_matrix) for presets known to be
    /// regular; bit-identical to the checked path
    pub(crate) const fn preset_to_xyz_matrix(&self) -> Matrix3x3 {
        self.scaled_primaries(&self.primaries_matrix().inverse_const())
    }

    /// XYZ → linear RGB matrix
    pub fn from_xyz_matrix(&self) -> Result<Matrix3x3> {
        self.to_xyz_matrix()?
            .inverse()
            .ok_or(Error::SingularMatrix("working space matrix"))
    }

    /// Look up a preset by name (case-insensitive, punctuation ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let space = match key.as_str() {
            "srgb" => SRGB,
            "srgbsimplified" => SRGB_SIMPLIFIED,
            "rec709" | "bt709" => REC709,
            "rec2020" | "bt2020" => REC2020,
            "ecirgbv2" | "ecirgb" => ECI_RGB_V2,
            "adobergb" | "adobergb1998" => ADOBE_RGB_1998,
            "applesrgb" | "applergb" => APPLE_SRGB,
            "bestrgb" => BEST_RGB,
            "betargb" => BETA_RGB,
            "brucergb" => BRUCE_RGB,
            "ciergb" => CIE_RGB,
            "colormatchrgb" => COLOR_MATCH_RGB,
            "donrgb4" => DON_RGB_4,
            "ektaspaceps5" => EKTA_SPACE_PS5,
            "ntscrgb" => NTSC_RGB,
            "palsecamrgb" => PAL_SECAM_RGB,
            "prophotorgb" => PRO_PHOTO_RGB,
            "smptecrgb" => SMPTE_C_RGB,
            "widegamutrgb" => WIDE_GAMUT_RGB,
            _ => return None,
        };
        Some(space)
    }
}

impl Default for RgbWorkingSpace {
    fn default() -> Self {
        SRGB
    }
}

// ============================================================================
// Presets
// ============================================================================

const SRGB_PRIMARIES: RgbPrimaries = RgbPrimaries::new((0.64, 0.33), (0.30, 0.60), (0.15, 0.06));

const fn space(
    white: WhitePoint,
    companding: Companding,
    r: Chromaticity,
    g: Chromaticity,
    b: Chromaticity,
) -> RgbWorkingSpace {
    RgbWorkingSpace::new(white, companding, RgbPrimaries::new(r, g, b))
}

/// sRGB (IEC 61966-2-1)
pub const SRGB: RgbWorkingSpace = RgbWorkingSpace::new(D65, Companding::Srgb, SRGB_PRIMARIES);

/// sRGB primaries with a plain 2.2 gamma
pub const SRGB_SIMPLIFIED: RgbWorkingSpace =
    RgbWorkingSpace::new(D65, Companding::Gamma(2.2), SRGB_PRIMARIES);

/// ITU-R BT.709
pub const REC709: RgbWorkingSpace = RgbWorkingSpace::new(D65, Companding::Rec709, SRGB_PRIMARIES);

/// ITU-R BT.2020
pub const REC2020: RgbWorkingSpace = space(
    D65,
    Companding::Rec2020,
    (0.708, 0.292),
    (0.170, 0.797),
    (0.131, 0.046),
);

/// eciRGB v2
pub const ECI_RGB_V2: RgbWorkingSpace =
    space(D50, Companding::LStar, (0.67, 0.33), (0.21, 0.71), (0.14, 0.08));

/// Adobe RGB (1998)
pub const ADOBE_RGB_1998: RgbWorkingSpace =
    space(D65, Companding::Gamma(2.2), (0.64, 0.33), (0.21, 0.71), (0.15, 0.06));

/// Apple sRGB
pub const APPLE_SRGB: RgbWorkingSpace = space(
    D65,
    Companding::Gamma(1.8),
    (0.625, 0.34),
    (0.28, 0.595),
    (0.155, 0.07),
);

pub const BEST_RGB: RgbWorkingSpace = space(
    D50,
    Companding::Gamma(2.2),
    (0.7347, 0.2653),
    (0.215, 0.775),
    (0.13, 0.035),
);

pub const BETA_RGB: RgbWorkingSpace = space(
    D50,
    Companding::Gamma(2.2),
    (0.6888, 0.3112),
    (0.1986, 0.7551),
    (0.1265, 0.0352),
);

pub const BRUCE_RGB: RgbWorkingSpace =
    space(D65, Companding::Gamma(2.2), (0.64, 0.33), (0.28, 0.65), (0.15, 0.06));

pub const CIE_RGB: RgbWorkingSpace = space(
    E,
    Companding::Gamma(2.2),
    (0.735, 0.265),
    (0.274, 0.717),
    (0.167, 0.009),
);

pub const COLOR_MATCH_RGB: RgbWorkingSpace = space(
    D50,
    Companding::Gamma(1.8),
    (0.63, 0.34),
    (0.295, 0.605),
    (0.15, 0.075),
);

pub const DON_RGB_4: RgbWorkingSpace =
    space(D50, Companding::Gamma(2.2), (0.696, 0.3), (0.215, 0.765), (0.13, 0.035));

pub const EKTA_SPACE_PS5: RgbWorkingSpace =
    space(D50, Companding::Gamma(2.2), (0.695, 0.305), (0.26, 0.7), (0.11, 0.005));

/// NTSC (1953), illuminant C
pub const NTSC_RGB: RgbWorkingSpace =
    space(C, Companding::Gamma(2.2), (0.67, 0.33), (0.21, 0.71), (0.14, 0.08));

pub const PAL_SECAM_RGB: RgbWorkingSpace =
    space(D65, Companding::Gamma(2.2), (0.64, 0.33), (0.29, 0.6), (0.15, 0.06));

/// ProPhoto RGB (ROMM)
pub const PRO_PHOTO_RGB: RgbWorkingSpace = space(
    D50,
    Companding::Gamma(1.8),
    (0.7347, 0.2653),
    (0.1596, 0.8404),
    (0.0366, 0.0001),
);

pub const SMPTE_C_RGB: RgbWorkingSpace = space(
    D65,
    Companding::Gamma(2.2),
    (0.63, 0.34),
    (0.31, 0.595),
    (0.155, 0.07),
);

pub const WIDE_GAMUT_RGB: RgbWorkingSpace = space(
    D50,
    Companding::Gamma(2.2),
    (0.735, 0.265),
    (0.115, 0.826),
    (0.157, 0.018),
);

/// Every preset, in declaration order
pub const ALL_PRESETS: [RgbWorkingSpace; 19] = [
    SRGB,
    SRGB_SIMPLIFIED,
    REC709,
    REC2020,
    ECI_RGB_V2,
    ADOBE_RGB_1998,
    APPLE_SRGB,
    BEST_RGB,
    BETA_RGB,
    BRUCE_RGB,
    CIE_RGB,
    COLOR_MATCH_RGB,
    DON_RGB_4,
    EKTA_SPACE_PS5,
    NTSC_RGB,
    PAL_SECAM_RGB,
    PRO_PHOTO_RGB,
    SMPTE_C_RGB,
    WIDE_GAMUT_RGB,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Xyz;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_srgb_matrix() {
        // Lindbloom's sRGB (D65) matrix
        let expected = Matrix3x3::new([
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ]);
        let m = SRGB.to_xyz_matrix().unwrap();
        assert!(m.approx_eq(&expected, EPSILON), "sRGB matrix: {:?}", m);
    }

    #[test]
    fn test_white_maps_to_white_point() {
        for space in ALL_PRESETS {
            let m = space.to_xyz_matrix().unwrap();
            let white = Xyz::from_array(m.multiply_vec([1.0, 1.0, 1.0]));
            assert!(
                white.approx_eq(&space.white_point.xyz, 1e-9),
                "{:?}: {:?} vs {:?}",
                space.primaries,
                white,
                space.white_point.xyz
            );
        }
    }

    #[test]
    fn test_inverse_matrix() {
        for space in ALL_PRESETS {
            let fwd = space.to_xyz_matrix().unwrap();
            let inv = space.from_xyz_matrix().unwrap();
            assert!(fwd.multiply(&inv).is_identity(1e-8));
        }
    }

    #[test]
    fn test_preset_path_matches_checked() {
        for space in ALL_PRESETS {
            assert_eq!(space.preset_to_xyz_matrix(), space.to_xyz_matrix().unwrap());
        }
    }

    #[test]
    fn test_degenerate_primaries() {
        // all three primaries on one line
        let space = space(D65, Companding::Srgb, (0.2, 0.2), (0.3, 0.3), (0.4, 0.4));
        assert_eq!(
            space.to_xyz_matrix(),
            Err(Error::SingularMatrix("working space primaries"))
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(RgbWorkingSpace::from_name("sRGB"), Some(SRGB));
        assert_eq!(RgbWorkingSpace::from_name("Adobe RGB (1998)"), Some(ADOBE_RGB_1998));
        assert_eq!(RgbWorkingSpace::from_name("ProPhoto RGB"), Some(PRO_PHOTO_RGB));
        assert_eq!(RgbWorkingSpace::from_name("PAL/SECAM RGB"), Some(PAL_SECAM_RGB));
        assert_eq!(RgbWorkingSpace::from_name("nope"), None);
    }
}
