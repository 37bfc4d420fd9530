//! Von Kries chromatic adaptation
//!
//! A color seen under one illuminant is re-expressed under another by
//! scaling each cone response independently. With `W` the forward XYZ → LMS
//! matrix:
//!
//! ```text
//! gain    = (W · target_white) ⊘ (W · source_white)
//! adapted = W⁻¹ · (gain ⊙ (W · color))
//! ```
//!
//! The scaling is done in cone space, not XYZ; only the `XyzScaling` preset
//! (identity W) degenerates to plain XYZ scaling.

use crate::adaptation::lms::check_len;
use crate::adaptation::{LmsAdaptationMatrix, XyzLmsConverter};
use crate::color::{Lms, Xyz};
use crate::error::{Error, Result};
use crate::math::{Matrix3x3, vector};
use crate::simd::diagonal_sandwich_vec3_batch;
use std::fmt::Debug;

/// A chromatic adaptation model
///
/// Implementations are immutable after construction and may be shared
/// across threads.
pub trait ChromaticAdaptation: Send + Sync + Debug {
    /// Re-express `color`, seen under `source_white`, under `target_white`
    fn transform(&self, color: Xyz, source_white: Xyz, target_white: Xyz) -> Xyz;

    /// Adapt a slice of colors sharing the same pair of white points
    ///
    /// `output` must be at least as long as `input`.
    fn transform_slice(
        &self,
        input: &[Xyz],
        output: &mut [Xyz],
        source_white: Xyz,
        target_white: Xyz,
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        for (src, dst) in input.iter().zip(output.iter_mut()) {
            *dst = self.transform(*src, source_white, target_white);
        }
        Ok(())
    }
}

/// Von Kries adaptation over a configurable cone basis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VonKriesAdaptation {
    converter: XyzLmsConverter,
}

impl VonKriesAdaptation {
    /// Bradford cone basis
    pub const fn new() -> Self {
        Self::from_converter(XyzLmsConverter::new())
    }

    pub const fn from_preset(preset: LmsAdaptationMatrix) -> Self {
        Self::from_converter(XyzLmsConverter::from_preset(preset))
    }

    /// Fails with [`Error::SingularMatrix`] if `matrix` has no inverse
    pub fn with_matrix(matrix: Matrix3x3) -> Result<Self> {
        Ok(Self::from_converter(XyzLmsConverter::with_matrix(matrix)?))
    }

    pub const fn from_converter(converter: XyzLmsConverter) -> Self {
        Self { converter }
    }

    /// The XYZ ↔ LMS converter in use
    #[inline]
    pub const fn converter(&self) -> &XyzLmsConverter {
        &self.converter
    }

    /// Per-cone gain `target ⊘ source`
    ///
    /// A zero source cone response yields an infinite or NaN channel.
    #[inline]
    fn gain(&self, source_white: Xyz, target_white: Xyz) -> [f64; 3] {
        let source = self.converter.to_lms(source_white);
        let target = self.converter.to_lms(target_white);
        vector::div(target.to_array(), source.to_array())
    }

    #[inline]
    fn apply_gain(&self, gain: [f64; 3], color: Xyz) -> Xyz {
        let lms = self.converter.to_lms(color);
        let adapted = Lms::from_array(vector::mul(gain, lms.to_array()));
        self.converter.to_xyz(adapted)
    }

    /// Like [`ChromaticAdaptation::transform`], but rejects a white point
    /// with a zero, negative or non-finite component
    pub fn transform_checked(
        &self,
        color: Xyz,
        source_white: Xyz,
        target_white: Xyz,
    ) -> Result<Xyz> {
        validate_white("source", source_white)?;
        validate_white("target", target_white)?;
        Ok(self.transform(color, source_white, target_white))
    }

    /// The 3x3 matrix that performs this adaptation in one multiply
    ///
    /// `W⁻¹ · diag(gain) · W`. Equal white points give the exact identity.
    pub fn adaptation_matrix(&self, source_white: Xyz, target_white: Xyz) -> Matrix3x3 {
        if source_white == target_white {
            return Matrix3x3::identity();
        }
        let [g0, g1, g2] = self.gain(source_white, target_white);
        self.converter
            .inverse()
            .multiply(&Matrix3x3::diagonal(g0, g1, g2))
            .multiply(self.converter.forward())
    }
}

impl ChromaticAdaptation for VonKriesAdaptation {
    fn transform(&self, color: Xyz, source_white: Xyz, target_white: Xyz) -> Xyz {
        if source_white == target_white {
            return color;
        }
        self.apply_gain(self.gain(source_white, target_white), color)
    }

    fn transform_slice(
        &self,
        input: &[Xyz],
        output: &mut [Xyz],
        source_white: Xyz,
        target_white: Xyz,
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        if source_white == target_white {
            output[..input.len()].copy_from_slice(input);
            return Ok(());
        }

        diagonal_sandwich_vec3_batch(
            &self.converter.forward().m,
            self.gain(source_white, target_white),
            &self.converter.inverse().m,
            bytemuck::cast_slice(input),
            bytemuck::cast_slice_mut(output),
        );
        Ok(())
    }
}

fn validate_white(name: &'static str, xyz: Xyz) -> Result<()> {
    if xyz.is_positive_finite() {
        Ok(())
    } else {
        Err(Error::InvalidWhitePoint { name, xyz })
    }
}
