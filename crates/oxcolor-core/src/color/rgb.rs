//! RGB value types
//!
//! [`Rgb`] holds companded (encoded) values and [`LinearRgb`] holds linear
//! light. Neither carries its working space: the conversion facade
//! interprets both relative to its configured
//! [`RgbWorkingSpace`](crate::color::RgbWorkingSpace).

use bytemuck::{Pod, Zeroable};

/// Companded RGB, nominally in [0, 1]
///
/// Out-of-gamut results of a conversion keep their components outside the
/// unit range; call [`Rgb::clamp`] to bring them back.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// From 8-bit code values
    #[inline]
    pub fn from_u8(code: [u8; 3]) -> Self {
        Self::from_array(code.map(|v| f64::from(v) / 255.0))
    }

    /// Nearest 8-bit code values, saturating outside [0, 1]
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        self.to_array()
            .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Clamp every component to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self::from_array(self.to_array().map(|v| v.clamp(0.0, 1.0)))
    }

    /// True if every component lies in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(code: [u8; 3]) -> Self {
        Self::from_u8(code)
    }
}

/// Linear-light RGB
///
/// Unbounded: out-of-gamut colors keep negative or >1 components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for LinearRgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LinearRgb> for [f64; 3] {
    fn from(rgb: LinearRgb) -> Self {
        rgb.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_codes() {
        let rgb = Rgb::from([255u8, 128, 0]);
        assert_eq!(rgb.r, 1.0);
        assert!((rgb.g - 128.0 / 255.0).abs() < 1e-15);
        assert_eq!(rgb.to_u8(), [255, 128, 0]);

        // saturates
        assert_eq!(Rgb::new(1.2, -0.3, 0.5).to_u8(), [255, 0, 128]);
    }

    #[test]
    fn test_clamp_and_gamut() {
        let rgb = Rgb::new(1.5, -0.5, 0.5);
        assert!(!rgb.is_in_gamut());
        assert_eq!(rgb.clamp(), Rgb::new(1.0, 0.0, 0.5));
        assert!(rgb.clamp().is_in_gamut());
        assert!(Rgb::WHITE.is_in_gamut());
        assert!(Rgb::BLACK.is_in_gamut());
    }

    #[test]
    fn test_pod_cast() {
        let raw = [0.25f64, 0.5, 0.75, 1.0, 0.0, 0.5];
        let colors: &[LinearRgb] = bytemuck::cast_slice(&raw);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1], LinearRgb::new(1.0, 0.0, 0.5));

        let rgb: &[Rgb] = bytemuck::cast_slice(&raw);
        assert_eq!(rgb[0].to_array(), [0.25, 0.5, 0.75]);
    }
}
