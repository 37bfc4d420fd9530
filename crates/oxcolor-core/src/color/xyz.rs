//! CIE 1931 XYZ
//!
//! XYZ is the hub every conversion passes through: each other model is
//! converted to XYZ, optionally adapted to a new white point, then converted
//! to the target model.

use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Mul, Sub};

/// CIE XYZ tristimulus values
///
/// Y is luminance. Components are unbounded; a reference white is usually
/// normalized to Y = 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every component is finite and strictly positive, the
    /// requirement for a usable reference white
    #[inline]
    pub fn is_positive_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite() && *c > 0.0)
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Chromaticity (x, y) and luminance Y
    ///
    /// A zero component sum has no chromaticity; (0, 0) is reported.
    #[inline]
    pub fn to_xyy(&self) -> (f64, f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum, self.y)
        } else {
            (0.0, 0.0, self.y)
        }
    }

    /// From chromaticity (x, y) and luminance Y; y = 0 yields black
    #[inline]
    pub fn from_xyy(x: f64, y: f64, luminance: f64) -> Self {
        if y > 0.0 {
            let k = luminance / y;
            Self::new(x * k, luminance, (1.0 - x - y) * k)
        } else {
            Self::default()
        }
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

/// Component-wise binary operators
macro_rules! componentwise {
    ($($op:ident :: $method:ident => $sym:tt),+ $(,)?) => {
        $(
            impl $op for Xyz {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::new(self.x $sym rhs.x, self.y $sym rhs.y, self.z $sym rhs.z)
                }
            }
        )+
    };
}

componentwise!(Add::add => +, Sub::sub => -, Mul::mul => *, Div::div => /);

impl Mul<f64> for Xyz {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let xyz: Xyz = arr.into();
        assert_eq!(xyz, Xyz::new(0.1, 0.2, 0.3));
        assert_eq!(<[f64; 3]>::from(xyz), arr);
    }

    #[test]
    fn test_pod_cast() {
        let raw = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let colors: &[Xyz] = bytemuck::cast_slice(&raw);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1], Xyz::new(0.4, 0.5, 0.6));
    }

    #[test]
    fn test_xyy() {
        let (x, y, big_y) = Xyz::new(0.25, 0.5, 0.25).to_xyy();
        assert_eq!((x, y, big_y), (0.25, 0.5, 0.5));
        assert!(Xyz::from_xyy(x, y, big_y).approx_eq(&Xyz::new(0.25, 0.5, 0.25), 1e-15));
    }

    #[test]
    fn test_xyy_black() {
        assert_eq!(Xyz::default().to_xyy(), (0.0, 0.0, 0.0));
        assert_eq!(Xyz::from_xyy(0.3, 0.0, 0.5), Xyz::default());
    }

    #[test]
    fn test_positive_finite() {
        assert!(Xyz::new(0.95047, 1.0, 1.08883).is_positive_finite());
        assert!(!Xyz::new(0.95047, 0.0, 1.08883).is_positive_finite());
        assert!(!Xyz::new(-0.1, 1.0, 1.0).is_positive_finite());
        assert!(!Xyz::new(f64::NAN, 1.0, 1.0).is_positive_finite());
        assert!(!Xyz::new(f64::INFINITY, 1.0, 1.0).is_positive_finite());
    }

    #[test]
    fn test_operators() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        let b = Xyz::new(0.5, 0.25, 2.0);

        assert_eq!(a + b, Xyz::new(1.5, 2.25, 5.0));
        assert_eq!(a - b, Xyz::new(0.5, 1.75, 1.0));
        assert_eq!(a * b, Xyz::new(0.5, 0.5, 6.0));
        assert_eq!(a / b, Xyz::new(2.0, 8.0, 1.5));
        assert_eq!(a * 2.0, Xyz::new(2.0, 4.0, 6.0));
    }
}
