//! CIE L*u*v* Color Space
//!
//! Relative to a reference white; the conversion facade uses D65 unless
//! configured otherwise.

use crate::color::lab::{CIE_EPSILON, CIE_KAPPA};
use crate::color::{WhitePoint, Xyz};
use bytemuck::{Pod, Zeroable};

/// CIE Luv color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Luv {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Red-green chromatic axis
    pub u: f64,
    /// Yellow-blue chromatic axis
    pub v: f64,
}

/// u' and v' chromaticity; zero for a zero denominator
#[inline]
fn uv_prime(xyz: Xyz) -> (f64, f64) {
    let den = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if den == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz.x / den, 9.0 * xyz.y / den)
    }
}

#[inline]
fn nan_to_zero(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

impl Luv {
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.u, self.v]
    }

    /// Convert from XYZ relative to `white`
    pub fn from_xyz(xyz: Xyz, white: &WhitePoint) -> Self {
        let yr = xyz.y / white.xyz.y;
        let (up, vp) = uv_prime(xyz);
        let (ur, vr) = uv_prime(white.xyz);

        let l = if yr > CIE_EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            CIE_KAPPA * yr
        };

        Self {
            l: nan_to_zero(l),
            u: nan_to_zero(13.0 * l * (up - ur)),
            v: nan_to_zero(13.0 * l * (vp - vr)),
        }
    }

    /// Convert to XYZ relative to `white`
    pub fn to_xyz(&self, white: &WhitePoint) -> Xyz {
        let (l, u, v) = (self.l, self.u, self.v);
        if l <= 0.0 {
            return Xyz::default();
        }

        let (u0, v0) = uv_prime(white.xyz);

        let yr = if l > CIE_KAPPA * CIE_EPSILON {
            ((l + 16.0) / 116.0).powi(3)
        } else {
            l / CIE_KAPPA
        };
        let y = yr * white.xyz.y;

        let a = (52.0 * l / (u + 13.0 * l * u0) - 1.0) / 3.0;
        let b = -5.0 * y;
        let c = -1.0 / 3.0;
        let d = y * (39.0 * l / (v + 13.0 * l * v0) - 5.0);

        let x = (d - b) / (a - c);
        let z = x * a + b;

        Xyz::new(nan_to_zero(x), nan_to_zero(y), nan_to_zero(z))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.u - other.u).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

impl From<[f64; 3]> for Luv {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Luv> for [f64; 3] {
    fn from(luv: Luv) -> Self {
        luv.to_array()
    }
}
