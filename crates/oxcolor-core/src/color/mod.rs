//! Color value types and per-model formulas
//!
//! Value types are plain `#[repr(C)]` triples of `f64` (four for CMYK).
//! They carry no reference white or working space; that context comes from
//! the caller or from [`ConverterOptions`](crate::convert::ConverterOptions).
//!
//! - CIE XYZ, xyY and LMS cone responses
//! - CIE Lab / LCh(ab), Luv / LCh(uv), Hunter Lab
//! - RGB (companded and linear), HSL, HSV, CMYK, YCbCr
//! - White points, companding curves and RGB working spaces

pub mod cmyk;
pub mod companding;
pub mod hsl;
pub mod hsv;
pub mod hunter_lab;
pub mod lab;
pub mod lch;
pub mod lchuv;
pub mod lms;
pub mod luv;
pub mod rgb;
pub mod white_point;
pub mod working_space;
pub mod xyy;
pub mod xyz;
pub mod ycbcr;

pub use cmyk::Cmyk;
pub use companding::Companding;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hunter_lab::HunterLab;
pub use lab::{Lab, delta_e_2000};
pub use lch::Lch;
pub use lchuv::Lchuv;
pub use lms::Lms;
pub use luv::Luv;
pub use rgb::{LinearRgb, Rgb};
pub use white_point::{A, B, C, D50, D55, D65, D75, E, F2, F7, F11, WhitePoint};
pub use working_space::{RgbPrimaries, RgbWorkingSpace};
pub use xyy::XyY;
pub use xyz::Xyz;
pub use ycbcr::YCbCr;
