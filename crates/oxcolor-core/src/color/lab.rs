//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Lab values are relative to a reference white; the conversion facade
//! uses D50 unless configured otherwise.

use crate::color::lch::to_polar;
use crate::color::{WhitePoint, Xyz};
use bytemuck::{Pod, Zeroable};

/// CIE ε: the linear/cube-root switch point in relative luminance
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ: slope of the linear segment
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// 25⁷, the chroma pivot of CIEDE2000
const DE2000_CHROMA_PIVOT: f64 = 6_103_515_625.0;

/// CIELAB coordinates: lightness in [0, 100], a* green to red, b* blue to
/// yellow
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
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

    /// From XYZ relative to `white`
    pub fn from_xyz(xyz: Xyz, white: &WhitePoint) -> Self {
        let [fx, fy, fz] = (xyz / white.xyz).to_array().map(lab_f);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// To XYZ relative to `white`
    pub fn to_xyz(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        // L* decides the segment for Y directly
        let yr = if self.l > CIE_KAPPA * CIE_EPSILON {
            fy * fy * fy
        } else {
            self.l / CIE_KAPPA
        };

        Xyz::new(lab_f_inv(fx), yr, lab_f_inv(fz)) * white.xyz
    }

    /// C*ab
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// h_ab in degrees within [0, 360)
    #[inline]
    pub fn hue(&self) -> f64 {
        to_polar(self.a, self.b).1
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > CIE_EPSILON {
        cube
    } else {
        (116.0 * f - 16.0) / CIE_KAPPA
    }
}

/// sqrt(c⁷ / (c⁷ + 25⁷))
#[inline]
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + DE2000_CHROMA_PIVOT)).sqrt()
}

#[inline]
fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// CIEDE2000 color difference with unit weights (kL = kC = kH = 1)
///
/// A difference of about 1.0 is just noticeable. Both colors must be
/// relative to the same reference white.
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    // a* is stretched for low-chroma pairs before going polar
    let g = 0.5 * (1.0 - chroma_weight((lab1.chroma() + lab2.chroma()) / 2.0));
    let (c1, h1) = to_polar(lab1.a * (1.0 + g), lab1.b);
    let (c2, h2) = to_polar(lab2.a * (1.0 + g), lab2.b);
    let neutral = c1 * c2 == 0.0;

    let dh = if neutral {
        0.0
    } else {
        let d = h2 - h1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };

    let delta_l = lab2.l - lab1.l;
    let delta_c = c2 - c1;
    let delta_h = 2.0 * (c1 * c2).sqrt() * (dh.to_radians() / 2.0).sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_mean = (c1 + c2) / 2.0;
    let h_mean = if neutral {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * cos_deg(h_mean - 30.0)
        + 0.24 * cos_deg(2.0 * h_mean)
        + 0.32 * cos_deg(3.0 * h_mean + 6.0)
        - 0.20 * cos_deg(4.0 * h_mean - 63.0);

    let l_offset = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_mean;
    let s_h = 1.0 + 0.015 * c_mean * t;

    let rotation = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let r_t = -2.0 * chroma_weight(c_mean) * (2.0 * rotation).to_radians().sin();

    let l = delta_l / s_l;
    let c = delta_c / s_c;
    let h = delta_h / s_h;
    (l * l + c * c + h * h + r_t * c * h).sqrt()
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
