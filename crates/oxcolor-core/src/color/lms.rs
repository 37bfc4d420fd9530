//! LMS cone response values
//!
//! Long, medium and short wavelength cone excitation. LMS values are
//! produced from XYZ by [`XyzLmsConverter`](crate::adaptation::XyzLmsConverter);
//! which LMS basis they live in depends on the matrix that converter holds.

use bytemuck::{Pod, Zeroable};

/// Cone response coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Lms {
    /// Long wavelength cone response
    pub l: f64,
    /// Medium wavelength cone response
    pub m: f64,
    /// Short wavelength cone response
    pub s: f64,
}

impl Lms {
    #[inline]
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            m: arr[1],
            s: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.m, self.s]
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
    }
}

impl From<[f64; 3]> for Lms {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lms> for [f64; 3] {
    fn from(lms: Lms) -> Self {
        lms.to_array()
    }
}
