//! HSL (hue, saturation, lightness)
//!
//! A cylindrical rearrangement of companded RGB. Hue is in degrees,
//! saturation and lightness in [0, 1].

use crate::color::Rgb;
use crate::color::lch::wrap_hue;
use bytemuck::{Pod, Zeroable};

/// Chroma below which a color is treated as achromatic
pub(crate) const ACHROMATIC_EPSILON: f64 = 1e-12;

/// Hue in degrees [0, 360) from RGB components, their max and chroma
#[inline]
pub(crate) fn rgb_hue(rgb: &Rgb, max: f64, chroma: f64) -> f64 {
    let sector = if max == rgb.r {
        (rgb.g - rgb.b) / chroma
    } else if max == rgb.g {
        2.0 + (rgb.b - rgb.r) / chroma
    } else {
        4.0 + (rgb.r - rgb.g) / chroma
    };
    wrap_hue(sector * 60.0)
}

/// HSL color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation (0 to 1)
    pub s: f64,
    /// Lightness (0 to 1)
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let chroma = max - min;
        let l = (max + min) / 2.0;

        if chroma.abs() < ACHROMATIC_EPSILON {
            return Self::new(0.0, 0.0, l);
        }

        let denom = if l <= 0.5 {
            max + min
        } else {
            2.0 - max - min
        };
        // out-of-gamut input can put l at 0 or 1 with nonzero chroma
        let s = if denom.abs() < ACHROMATIC_EPSILON {
            0.0
        } else {
            chroma / denom
        };

        Self::new(rgb_hue(&rgb, max, chroma), s, l)
    }

    pub fn to_rgb(&self) -> Rgb {
        let a = self.s * self.l.min(1.0 - self.l);
        let h = self.h.rem_euclid(360.0) / 30.0;
        let channel = |n: f64| {
            let k = (n + h) % 12.0;
            self.l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };
        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}
