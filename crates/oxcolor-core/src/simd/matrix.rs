//! Batch 3x3 kernels
//!
//! The per-element arithmetic matches [`Matrix3x3::multiply_vec`] term for
//! term, so batch results are bit-identical to single-value calls.
//!
//! [`Matrix3x3::multiply_vec`]: crate::math::Matrix3x3::multiply_vec

use multiversion::multiversion;

/// Multiply a 3x3 matrix by a batch of 3-element vectors
///
/// Processes `min(input.len(), output.len())` elements; callers check
/// lengths beforehand.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_multiply_vec3_batch(
    matrix: &[[f64; 3]; 3],
    input: &[[f64; 3]],
    output: &mut [[f64; 3]],
) {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *matrix;

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        let [x, y, z] = *inp;

        out[0] = m00 * x + m01 * y + m02 * z;
        out[1] = m10 * x + m11 * y + m12 * z;
        out[2] = m20 * x + m21 * y + m22 * z;
    }
}

/// `inverse × (gain ⊙ (forward × v))` for each vector in the batch
///
/// One pass of von Kries adaptation with a precomputed gain.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn diagonal_sandwich_vec3_batch(
    forward: &[[f64; 3]; 3],
    gain: [f64; 3],
    inverse: &[[f64; 3]; 3],
    input: &[[f64; 3]],
    output: &mut [[f64; 3]],
) {
    let [[f00, f01, f02], [f10, f11, f12], [f20, f21, f22]] = *forward;
    let [[i00, i01, i02], [i10, i11, i12], [i20, i21, i22]] = *inverse;
    let [g0, g1, g2] = gain;

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        let [x, y, z] = *inp;

        let l = g0 * (f00 * x + f01 * y + f02 * z);
        let m = g1 * (f10 * x + f11 * y + f12 * z);
        let s = g2 * (f20 * x + f21 * y + f22 * z);

        out[0] = i00 * l + i01 * m + i02 * s;
        out[1] = i10 * l + i11 * m + i12 * s;
        out[2] = i20 * l + i21 * m + i22 * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix3x3;

    const BRADFORD: [[f64; 3]; 3] = [
        [0.8951, 0.2664, -0.1614],
        [-0.7502, 1.7135, 0.0367],
        [0.0389, -0.0685, 1.0296],
    ];

    #[test]
    fn test_batch_matches_scalar() {
        let m = Matrix3x3::new(BRADFORD);
        let input = [[0.5, 0.3, 0.7], [1.0, 0.0, 0.0], [-0.2, 2.5, 0.1]];
        let mut output = [[0.0; 3]; 3];

        matrix_multiply_vec3_batch(&BRADFORD, &input, &mut output);

        for (inp, out) in input.iter().zip(output.iter()) {
            assert_eq!(*out, m.multiply_vec(*inp));
        }
    }

    #[test]
    fn test_batch_short_output() {
        let input = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let mut output = [[0.0; 3]; 1];
        let identity = Matrix3x3::identity().m;

        matrix_multiply_vec3_batch(&identity, &input, &mut output);
        assert_eq!(output[0], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sandwich_identity_gain() {
        let fwd = Matrix3x3::new(BRADFORD);
        let inv = fwd.inverse().unwrap();
        let input = [[0.4, 0.3, 0.2], [0.95047, 1.0, 1.08883]];
        let mut output = [[0.0; 3]; 2];

        diagonal_sandwich_vec3_batch(&fwd.m, [1.0, 1.0, 1.0], &inv.m, &input, &mut output);

        for (inp, out) in input.iter().zip(output.iter()) {
            for c in 0..3 {
                assert!((inp[c] - out[c]).abs() < 1e-12, "{:?} vs {:?}", inp, out);
            }
        }
    }
}
