//! XYZ → LMS transformation matrix presets
//!
//! Each preset names a cone-response basis used by a published chromatic
//! adaptation model. Coefficients are the forward (XYZ → LMS) matrices;
//! inverses are derived, never tabulated.
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html
//! - CIE 159:2004 (CAT02)
//! - Li, Luo, Rigg, Hunt (2002) CMCCAT2000

use crate::error::Error;
use crate::math::Matrix3x3;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Cone response matrices
// ============================================================================

/// Hunt-Pointer-Estevez, normalized to equal-energy illuminant E
pub const VON_KRIES_HPE: Matrix3x3 = Matrix3x3::new([
    [0.3897, 0.6890, -0.0787],
    [-0.2298, 1.1834, 0.0464],
    [0.0, 0.0, 1.0],
]);

/// Hunt-Pointer-Estevez, normalized to D65
pub const VON_KRIES_HPE_ADJUSTED: Matrix3x3 = Matrix3x3::new([
    [0.40024, 0.7076, -0.08081],
    [-0.2263, 1.16532, 0.0457],
    [0.0, 0.0, 0.91822],
]);

/// Identity: scale XYZ directly
pub const XYZ_SCALING: Matrix3x3 = Matrix3x3::identity();

/// Bradford (Lam 1985)
pub const BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Spectrally sharpened Bradford
pub const BRADFORD_SHARP: Matrix3x3 = Matrix3x3::new([
    [1.2694, -0.0988, -0.1706],
    [-0.8364, 1.8006, 0.0357],
    [0.0297, -0.0315, 1.0018],
]);

/// CMCCAT2000
pub const CMCCAT2000: Matrix3x3 = Matrix3x3::new([
    [0.7982, 0.3389, -0.1371],
    [-0.5918, 1.5512, 0.0406],
    [0.0008, 0.0239, 0.9753],
]);

/// CIECAM02 CAT02
pub const CAT02: Matrix3x3 = Matrix3x3::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Named cone-response basis for XYZ ↔ LMS conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LmsAdaptationMatrix {
    /// Von Kries with Hunt-Pointer-Estevez primaries (illuminant E)
    VonKriesHpe,
    /// Von Kries with Hunt-Pointer-Estevez primaries (D65)
    VonKriesHpeAdjusted,
    /// No cone transform; channels are scaled in XYZ
    XyzScaling,
    /// Bradford (ICC default)
    #[default]
    Bradford,
    /// Sharpened Bradford
    BradfordSharp,
    /// CMCCAT2000
    Cmccat2000,
    /// CIECAM02 CAT02
    Cat02,
}

impl LmsAdaptationMatrix {
    /// Every preset
    pub const ALL: [Self; 7] = [
        Self::VonKriesHpe,
        Self::VonKriesHpeAdjusted,
        Self::XyzScaling,
        Self::Bradford,
        Self::BradfordSharp,
        Self::Cmccat2000,
        Self::Cat02,
    ];

    /// Forward XYZ → LMS matrix
    pub const fn matrix(&self) -> Matrix3x3 {
        match self {
            Self::VonKriesHpe => VON_KRIES_HPE,
            Self::VonKriesHpeAdjusted => VON_KRIES_HPE_ADJUSTED,
            Self::XyzScaling => XYZ_SCALING,
            Self::Bradford => BRADFORD,
            Self::BradfordSharp => BRADFORD_SHARP,
            Self::Cmccat2000 => CMCCAT2000,
            Self::Cat02 => CAT02,
        }
    }

    /// Canonical lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::VonKriesHpe => "von-kries-hpe",
            Self::VonKriesHpeAdjusted => "von-kries-hpe-adjusted",
            Self::XyzScaling => "xyz-scaling",
            Self::Bradford => "bradford",
            Self::BradfordSharp => "bradford-sharp",
            Self::Cmccat2000 => "cmccat2000",
            Self::Cat02 => "cat02",
        }
    }
}

impl fmt::Display for LmsAdaptationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LmsAdaptationMatrix {
    type Err = Error;

    /// Case-insensitive; `-`, `_` and spaces are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "vonkrieshpe" | "hpe" => Ok(Self::VonKriesHpe),
            "vonkrieshpeadjusted" | "vonkries" => Ok(Self::VonKriesHpeAdjusted),
            "xyzscaling" => Ok(Self::XyzScaling),
            "bradford" => Ok(Self::Bradford),
            "bradfordsharp" => Ok(Self::BradfordSharp),
            "cmccat2000" => Ok(Self::Cmccat2000),
            "cat02" => Ok(Self::Cat02),
            _ => Err(Error::UnknownPreset(s.to_string())),
        }
    }
}
