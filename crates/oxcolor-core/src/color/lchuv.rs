//! CIE LCh(uv): the cylindrical form of Luv

use crate::color::Luv;
use crate::color::lch::{from_polar, to_polar};
use bytemuck::{Pod, Zeroable};

/// CIE LCh(uv) color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Lchuv {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue in degrees, [0, 360)
    pub h: f64,
}

impl Lchuv {
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

    pub fn from_luv(luv: Luv) -> Self {
        let (c, h) = to_polar(luv.u, luv.v);
        Self { l: luv.l, c, h }
    }

    pub fn to_luv(&self) -> Luv {
        let (u, v) = from_polar(self.c, self.h);
        Luv::new(self.l, u, v)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}

impl From<Luv> for Lchuv {
    fn from(luv: Luv) -> Self {
        Self::from_luv(luv)
    }
}

impl From<Lchuv> for Luv {
    fn from(lch: Lchuv) -> Self {
        lch.to_luv()
    }
}
