//! Hunter Lab Color Space
//!
//! An older opponent space built on square roots rather than cube roots.
//! The chromatic coefficients Ka and Kb are 175 and 70 for illuminant C
//! and are otherwise derived from the reference white.

use crate::color::{C, WhitePoint, Xyz};
use bytemuck::{Pod, Zeroable};

/// Hunter Lab color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct HunterLab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Red-green axis
    pub a: f64,
    /// Yellow-blue axis
    pub b: f64,
}

/// Ka coefficient for a reference white
#[inline]
fn ka(white: &Xyz) -> f64 {
    if *white == C.xyz {
        175.0
    } else {
        100.0 * (175.0 / 198.04) * (white.x + white.y)
    }
}

/// Kb coefficient for a reference white
#[inline]
fn kb(white: &Xyz) -> f64 {
    if *white == C.xyz {
        70.0
    } else {
        100.0 * (70.0 / 218.11) * (white.y + white.z)
    }
}

impl HunterLab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ relative to `white`
    ///
    /// Black (Y = 0) maps to (0, 0, 0).
    pub fn from_xyz(xyz: Xyz, white: &WhitePoint) -> Self {
        let w = &white.xyz;
        let yr = xyz.y / w.y;
        let sqrt_yr = yr.sqrt();

        let l = 100.0 * sqrt_yr;
        let a = ka(w) * ((xyz.x / w.x - yr) / sqrt_yr);
        let b = kb(w) * ((yr - xyz.z / w.z) / sqrt_yr);

        Self {
            l,
            a: if a.is_nan() { 0.0 } else { a },
            b: if b.is_nan() { 0.0 } else { b },
        }
    }

    /// Convert to XYZ relative to `white`
    pub fn to_xyz(&self, white: &WhitePoint) -> Xyz {
        let w = &white.xyz;
        let l = self.l / 100.0;
        let y = l * l * w.y;
        let yr = y / w.y;
        let sqrt_yr = yr.sqrt();

        let x = ((self.a / ka(w)) * sqrt_yr + yr) * w.x;
        let z = ((self.b / kb(w)) * sqrt_yr - yr) * -w.z;

        Xyz::new(x, y, z)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for HunterLab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<HunterLab> for [f64; 3] {
    fn from(lab: HunterLab) -> Self {
        lab.to_array()
    }
}
