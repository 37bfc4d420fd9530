//! YCbCr, JPEG full range
//!
//! Components span 0..=255 with BT.601 luma weights; chroma is centered
//! on 128.

use crate::color::Rgb;
use bytemuck::{Pod, Zeroable};

/// YCbCr color (JFIF full range, 0 to 255)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct YCbCr {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

impl YCbCr {
    #[inline]
    pub const fn new(y: f64, cb: f64, cr: f64) -> Self {
        Self { y, cb, cr }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.y, self.cb, self.cr]
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r * 255.0, rgb.g * 255.0, rgb.b * 255.0);
        Self {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            cb: 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
            cr: 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
        }
    }

    /// Output is clamped to [0, 1]
    pub fn to_rgb(&self) -> Rgb {
        let cb = self.cb - 128.0;
        let cr = self.cr - 128.0;
        let r = self.y + 1.402 * cr;
        let g = self.y - 0.344136 * cb - 0.714136 * cr;
        let b = self.y + 1.772 * cb;
        Rgb::new(r / 255.0, g / 255.0, b / 255.0).clamp()
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.cb - other.cb).abs() < epsilon
            && (self.cr - other.cr).abs() < epsilon
    }
}

impl From<Rgb> for YCbCr {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<YCbCr> for Rgb {
    fn from(ycc: YCbCr) -> Self {
        ycc.to_rgb()
    }
}
