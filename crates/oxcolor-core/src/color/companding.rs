//! Transfer functions between companded and linear RGB
//!
//! Every curve is applied to the magnitude of its input and the sign is
//! restored afterwards, so out-of-gamut (negative) linear values survive a
//! compress/expand round trip.

use crate::color::lab::{CIE_EPSILON, CIE_KAPPA};

/// Rec. 2020 α (12-bit precision)
const REC2020_ALPHA: f64 = 1.09929682680944;
/// Rec. 2020 β (12-bit precision)
const REC2020_BETA: f64 = 0.018053968510807;

/// An RGB companding curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companding {
    /// IEC 61966-2-1 piecewise sRGB curve
    Srgb,
    /// ITU-R BT.709 curve
    Rec709,
    /// ITU-R BT.2020 curve
    Rec2020,
    /// Pure power curve: linear = encoded^γ
    Gamma(f64),
    /// CIE L* curve (eciRGB v2)
    LStar,
}

impl Companding {
    /// Encoded → linear
    #[inline]
    pub fn expand(&self, encoded: f64) -> f64 {
        let v = encoded.abs();
        let linear = match *self {
            Self::Srgb => srgb_expand(v),
            Self::Rec709 => {
                if v < 0.081 {
                    v / 4.5
                } else {
                    ((v + 0.099) / 1.099).powf(1.0 / 0.45)
                }
            }
            Self::Rec2020 => {
                if v < 4.5 * REC2020_BETA {
                    v / 4.5
                } else {
                    ((v + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
                }
            }
            Self::Gamma(gamma) => v.powf(gamma),
            Self::LStar => {
                if v <= 0.08 {
                    100.0 * v / CIE_KAPPA
                } else {
                    ((v + 0.16) / 1.16).powi(3)
                }
            }
        };
        linear.copysign(encoded)
    }

    /// Linear → encoded
    #[inline]
    pub fn compress(&self, linear: f64) -> f64 {
        let v = linear.abs();
        let encoded = match *self {
            Self::Srgb => srgb_compress(v),
            Self::Rec709 => {
                if v < 0.018 {
                    4.5 * v
                } else {
                    1.099 * v.powf(0.45) - 0.099
                }
            }
            Self::Rec2020 => {
                if v < REC2020_BETA {
                    4.5 * v
                } else {
                    REC2020_ALPHA * v.powf(0.45) - (REC2020_ALPHA - 1.0)
                }
            }
            Self::Gamma(gamma) => v.powf(1.0 / gamma),
            Self::LStar => {
                if v <= CIE_EPSILON {
                    v * CIE_KAPPA / 100.0
                } else {
                    1.16 * v.cbrt() - 0.16
                }
            }
        };
        encoded.copysign(linear)
    }
}

/// sRGB gamma decode (encoded → linear) for a non-negative value
#[inline]
fn srgb_expand(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded) for a non-negative value
#[inline]
fn srgb_compress(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    const ALL: [Companding; 6] = [
        Companding::Srgb,
        Companding::Rec709,
        Companding::Rec2020,
        Companding::Gamma(2.2),
        Companding::Gamma(1.8),
        Companding::LStar,
    ];

    #[test]
    fn test_endpoints() {
        for c in ALL {
            assert!(c.expand(0.0).abs() < EPSILON, "{:?}", c);
            assert!((c.expand(1.0) - 1.0).abs() < 1e-6, "{:?}: {}", c, c.expand(1.0));
            assert!((c.compress(1.0) - 1.0).abs() < 1e-6, "{:?}: {}", c, c.compress(1.0));
        }
    }

    #[test]
    fn test_srgb_known_values() {
        // 0.5 encoded is ~0.214 linear
        let linear = Companding::Srgb.expand(0.5);
        assert!((linear - 0.214041).abs() < 1e-6, "got {}", linear);

        // Linear segment
        assert!((Companding::Srgb.expand(0.04) - 0.04 / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        for c in ALL {
            for i in 0..=20 {
                let v = i as f64 / 20.0;
                let back = c.compress(c.expand(v));
                assert!((v - back).abs() < 1e-9, "{:?}: {} vs {}", c, v, back);
            }
        }
    }

    #[test]
    fn test_sign_preserving() {
        for c in ALL {
            let v = 0.6;
            assert_eq!(c.expand(-v), -c.expand(v), "{:?}", c);
            assert_eq!(c.compress(-v), -c.compress(v), "{:?}", c);
        }
    }

    #[test]
    fn test_monotonic() {
        for c in ALL {
            let mut prev = c.expand(0.0);
            for i in 1..=100 {
                let next = c.expand(i as f64 / 100.0);
                assert!(next >= prev, "{:?} not monotonic at {}", c, i);
                prev = next;
            }
        }
    }
}
