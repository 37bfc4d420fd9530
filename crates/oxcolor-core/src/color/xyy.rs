//! CIE xyY chromaticity + luminance

use crate::color::Xyz;
use bytemuck::{Pod, Zeroable};

/// CIE xyY color: chromaticity (x, y) and luminance Y
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct XyY {
    /// Chromaticity x
    pub x: f64,
    /// Chromaticity y
    pub y: f64,
    /// Luminance Y
    pub luminance: f64,
}

impl XyY {
    #[inline]
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.luminance]
    }

    /// Chromaticity of `xyz`; a zero sum yields (0, 0, Y)
    pub fn from_xyz(xyz: Xyz) -> Self {
        let (x, y, luminance) = xyz.to_xyy();
        Self { x, y, luminance }
    }

    /// Back to XYZ; chromaticity y = 0 yields black
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from_xyy(self.x, self.y, self.luminance)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.luminance - other.luminance).abs() < epsilon
    }
}

impl From<[f64; 3]> for XyY {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<XyY> for [f64; 3] {
    fn from(c: XyY) -> Self {
        c.to_array()
    }
}
