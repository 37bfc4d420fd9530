//! HSV (hue, saturation, value)

use crate::color::Rgb;
use crate::color::hsl::{ACHROMATIC_EPSILON, rgb_hue};
use bytemuck::{Pod, Zeroable};

/// HSV color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Hsv {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation (0 to 1)
    pub s: f64,
    /// Value (0 to 1)
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let chroma = max - min;

        if chroma.abs() < ACHROMATIC_EPSILON {
            return Self::new(0.0, 0.0, max);
        }

        // only out-of-gamut input reaches here with max at zero
        let s = if max.abs() < ACHROMATIC_EPSILON {
            0.0
        } else {
            chroma / max
        };

        Self::new(rgb_hue(&rgb, max, chroma), s, max)
    }

    pub fn to_rgb(&self) -> Rgb {
        let (s, v) = (self.s, self.v);
        if s.abs() < ACHROMATIC_EPSILON {
            return Rgb::new(v, v, v);
        }

        let h = self.h.rem_euclid(360.0) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}
