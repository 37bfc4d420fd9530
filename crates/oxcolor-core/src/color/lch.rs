//! CIE LCh(ab): the cylindrical form of Lab
//!
//! Also hosts the polar helpers shared with LCh(uv).

use crate::color::Lab;
use bytemuck::{Pod, Zeroable};

/// Cartesian (a, b) to (chroma, hue in degrees within [0, 360))
#[inline]
pub(crate) fn to_polar(a: f64, b: f64) -> (f64, f64) {
    (a.hypot(b), wrap_hue(b.atan2(a).to_degrees()))
}

/// Fold a hue in (-360, 720) into [0, 360)
#[inline]
pub(crate) fn wrap_hue(mut h: f64) -> f64 {
    if h < 0.0 {
        h += 360.0;
    }
    // a tiny negative angle rounds up to exactly 360 after the shift
    if h >= 360.0 {
        h -= 360.0;
    }
    h
}

/// (chroma, hue in degrees) to Cartesian (a, b)
#[inline]
pub(crate) fn from_polar(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

/// CIE LCh(ab) color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Lch {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue in degrees, [0, 360)
    pub h: f64,
}

impl Lch {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    pub fn from_lab(lab: Lab) -> Self {
        let (c, h) = to_polar(lab.a, lab.b);
        Self { l: lab.l, c, h }
    }

    pub fn to_lab(&self) -> Lab {
        let (a, b) = from_polar(self.c, self.h);
        Lab::new(self.l, a, b)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        Self::from_lab(lab)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        lch.to_lab()
    }
}
