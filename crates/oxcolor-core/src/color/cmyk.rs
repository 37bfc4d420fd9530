//! CMYK (naive, profile-free subtractive model)

use crate::color::Rgb;
use bytemuck::{Pod, Zeroable};

/// CMYK color, all components in [0, 1]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let k = (1.0 - rgb.r).min(1.0 - rgb.g).min(1.0 - rgb.b);
        if (k - 1.0).abs() < f64::EPSILON {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let d = 1.0 - k;
        Self::new(
            (1.0 - rgb.r - k) / d,
            (1.0 - rgb.g - k) / d,
            (1.0 - rgb.b - k) / d,
            k,
        )
    }

    pub fn to_rgb(&self) -> Rgb {
        let w = 1.0 - self.k;
        Rgb::new((1.0 - self.c) * w, (1.0 - self.m) * w, (1.0 - self.y) * w)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.c - other.c).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.k - other.k).abs() < epsilon
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        cmyk.to_rgb()
    }
}
