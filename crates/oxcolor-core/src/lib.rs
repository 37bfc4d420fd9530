//! # oxcolor - color model conversion and chromatic adaptation
//!
//! Converts color values between RGB, linear RGB, HSL, HSV, CMYK, YCbCr,
//! CIE XYZ, xyY, Lab, LCh(ab), Luv, LCh(uv), Hunter Lab and LMS, and
//! re-expresses colors under a different reference white with the von Kries
//! model.
//!
//! ## Goals
//!
//! - **Exact where it matters**: adapting between equal white points is the
//!   identity, bit for bit
//! - **Explicit**: no global converter; every engine and converter is an
//!   ordinary value built from its options
//! - **Fast**: batch kernels dispatched per CPU (AVX2, SSE4.1, NEON) and
//!   optional rayon parallelism for slices
//!
//! ## Quick Start
//!
//! ```
//! use oxcolor_core::{ColorSpaceConverter, Lab, Rgb};
//!
//! let converter = ColorSpaceConverter::default();
//!
//! // sRGB (D65) to CIE Lab (D50), adapted with Bradford
//! let lab: Lab = converter.convert(Rgb::new(1.0, 0.5, 0.25));
//! let back: Rgb = converter.convert(lab);
//! assert!(back.approx_eq(&Rgb::new(1.0, 0.5, 0.25), 1e-9));
//! ```
//!
//! Chromatic adaptation on its own:
//!
//! ```
//! use oxcolor_core::{ChromaticAdaptation, VonKriesAdaptation, Xyz, D50, D65};
//!
//! let engine = VonKriesAdaptation::new();
//! let adapted = engine.transform(Xyz::new(0.5, 0.5, 0.5), D65.xyz, D50.xyz);
//! assert!((adapted.z - 0.37897).abs() < 1e-5);
//! ```

pub mod adaptation;
pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod simd;

pub use adaptation::{
    ChromaticAdaptation, LmsAdaptationMatrix, VonKriesAdaptation, XyzLmsConverter,
};
pub use color::{
    A, B, C, Cmyk, Companding, D50, D55, D65, D75, E, F2, F7, F11, Hsl, Hsv, HunterLab, Lab, Lch,
    Lchuv, LinearRgb, Lms, Luv, Rgb, RgbPrimaries, RgbWorkingSpace, WhitePoint, XyY, Xyz, YCbCr,
    delta_e_2000,
};
pub use convert::{Adaptation, ColorSpace, ColorSpaceConverter, ConverterOptions};
pub use error::{Error, Result};
pub use math::Matrix3x3;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
