//! CIE XYZ ↔ LMS converter
//!
//! A forward XYZ → LMS matrix paired with its inverse. The inverse is
//! computed once, at construction, so a singular matrix is reported there
//! and never at call time. Components are not range-checked: negative and
//! large values pass straight through.

use crate::adaptation::LmsAdaptationMatrix;
use crate::color::{Lms, Xyz};
use crate::error::{Error, Result};
use crate::math::Matrix3x3;
use crate::simd::matrix_multiply_vec3_batch;

/// Converts between CIE XYZ and LMS cone response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzLmsConverter {
    forward: Matrix3x3,
    inverse: Matrix3x3,
}

impl XyzLmsConverter {
    /// Converter using the Bradford cone basis
    pub const fn new() -> Self {
        Self::from_preset(LmsAdaptationMatrix::Bradford)
    }

    /// Converter for a named preset
    ///
    /// Presets are known to be regular, so this cannot fail.
    pub const fn from_preset(preset: LmsAdaptationMatrix) -> Self {
        let forward = preset.matrix();
        Self {
            forward,
            inverse: forward.inverse_const(),
        }
    }

    /// Converter for a caller-supplied XYZ → LMS matrix
    pub fn with_matrix(forward: Matrix3x3) -> Result<Self> {
        let inverse = forward
            .inverse()
            .ok_or(Error::SingularMatrix("XYZ to LMS transform"))?;
        Ok(Self { forward, inverse })
    }

    /// The XYZ → LMS matrix
    #[inline]
    pub const fn forward(&self) -> &Matrix3x3 {
        &self.forward
    }

    /// The LMS → XYZ matrix
    #[inline]
    pub const fn inverse(&self) -> &Matrix3x3 {
        &self.inverse
    }

    #[inline]
    pub fn to_lms(&self, xyz: Xyz) -> Lms {
        Lms::from_array(self.forward.multiply_vec(xyz.to_array()))
    }

    #[inline]
    pub fn to_xyz(&self, lms: Lms) -> Xyz {
        Xyz::from_array(self.inverse.multiply_vec(lms.to_array()))
    }

    /// Convert a slice of XYZ values; `output` must be at least as long
    pub fn to_lms_slice(&self, input: &[Xyz], output: &mut [Lms]) -> Result<()> {
        check_len(input.len(), output.len())?;
        matrix_multiply_vec3_batch(
            &self.forward.m,
            bytemuck::cast_slice(input),
            bytemuck::cast_slice_mut(output),
        );
        Ok(())
    }

    /// Convert a slice of LMS values; `output` must be at least as long
    pub fn to_xyz_slice(&self, input: &[Lms], output: &mut [Xyz]) -> Result<()> {
        check_len(input.len(), output.len())?;
        matrix_multiply_vec3_batch(
            &self.inverse.m,
            bytemuck::cast_slice(input),
            bytemuck::cast_slice_mut(output),
        );
        Ok(())
    }
}

impl Default for XyzLmsConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        return Err(Error::BufferSize { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_default_is_bradford() {
        let conv = XyzLmsConverter::default();
        assert_eq!(*conv.forward(), LmsAdaptationMatrix::Bradford.matrix());
    }

    #[test]
    fn test_bradford_inverse() {
        let expected = Matrix3x3::new([
            [0.9869929054667123, -0.14705425642099013, 0.15996265166373125],
            [0.43230526972339456, 0.5183602715367776, 0.0492912282128556],
            [-0.008528664575177328, 0.04004282165408487, 0.9684866957875502],
        ]);
        assert!(XyzLmsConverter::new().inverse().approx_eq(&expected, EPSILON));
    }

    #[test]
    fn test_pair_consistent() {
        for preset in LmsAdaptationMatrix::ALL {
            let conv = XyzLmsConverter::from_preset(preset);
            assert!(
                conv.forward().multiply(conv.inverse()).is_identity(1e-12),
                "{} forward × inverse is not identity",
                preset
            );
        }
    }

    #[test]
    fn test_preset_matches_with_matrix() {
        for preset in LmsAdaptationMatrix::ALL {
            let a = XyzLmsConverter::from_preset(preset);
            let b = XyzLmsConverter::with_matrix(preset.matrix()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let err = XyzLmsConverter::with_matrix(Matrix3x3::zero()).unwrap_err();
        assert!(matches!(err, Error::SingularMatrix(_)));

        let rank_two = Matrix3x3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(XyzLmsConverter::with_matrix(rank_two).is_err());
    }

    #[test]
    fn test_small_scale_matrix_accepted() {
        let forward = LmsAdaptationMatrix::Bradford.matrix().scale(1e-5);
        let conv = XyzLmsConverter::with_matrix(forward).unwrap();
        assert!(conv.forward().multiply(conv.inverse()).is_identity(1e-12));

        let xyz = Xyz::new(0.4, 0.3, 0.2);
        assert!(xyz.approx_eq(&conv.to_xyz(conv.to_lms(xyz)), 1e-12));
    }

    #[test]
    fn test_roundtrip() {
        let conv = XyzLmsConverter::new();
        for xyz in [
            Xyz::new(0.4, 0.3, 0.2),
            Xyz::new(0.95047, 1.0, 1.08883),
            Xyz::new(-0.1, 2.0, 50.0),
        ] {
            let back = conv.to_xyz(conv.to_lms(xyz));
            assert!(xyz.approx_eq(&back, 1e-12), "{:?} vs {:?}", xyz, back);
        }
    }

    #[test]
    fn test_to_lms_is_linear() {
        let conv = XyzLmsConverter::new();
        let (v1, v2) = (Xyz::new(0.4, 0.3, 0.2), Xyz::new(0.05, 0.8, 1.3));
        let (a, b) = (2.5, -0.75);

        let combined = conv.to_lms(v1 * a + v2 * b).to_array();
        let (l1, l2) = (conv.to_lms(v1).to_array(), conv.to_lms(v2).to_array());
        for c in 0..3 {
            assert!((combined[c] - (a * l1[c] + b * l2[c])).abs() < EPSILON);
        }
    }

    #[test]
    fn test_xyz_scaling_passes_through() {
        let conv = XyzLmsConverter::from_preset(LmsAdaptationMatrix::XyzScaling);
        let xyz = Xyz::new(0.4, 0.3, 0.2);
        assert_eq!(conv.to_lms(xyz).to_array(), xyz.to_array());
    }

    #[test]
    fn test_slices_match_single() {
        let conv = XyzLmsConverter::from_preset(LmsAdaptationMatrix::Cat02);
        let input = [Xyz::new(0.4, 0.3, 0.2), Xyz::new(0.1, 0.9, 0.5)];
        let mut lms = [Lms::default(); 2];
        let mut back = [Xyz::default(); 2];

        conv.to_lms_slice(&input, &mut lms).unwrap();
        conv.to_xyz_slice(&lms, &mut back).unwrap();

        for i in 0..2 {
            assert_eq!(lms[i], conv.to_lms(input[i]));
            assert_eq!(back[i], conv.to_xyz(lms[i]));
        }
    }

    #[test]
    fn test_slice_too_short() {
        let conv = XyzLmsConverter::new();
        let input = [Xyz::default(); 3];
        let mut output = [Lms::default(); 2];
        assert_eq!(
            conv.to_lms_slice(&input, &mut output),
            Err(Error::BufferSize {
                expected: 3,
                actual: 2
            })
        );
    }
}
