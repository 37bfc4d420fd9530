//! Chromatic adaptation
//!
//! - [`XyzLmsConverter`]: XYZ ↔ LMS cone response
//! - [`VonKriesAdaptation`]: per-cone gain adaptation between white points
//! - [`LmsAdaptationMatrix`]: named cone bases (Bradford, CAT02, ...)

pub mod lms;
pub mod lms_matrix;
pub mod von_kries;

pub use lms::XyzLmsConverter;
pub use lms_matrix::LmsAdaptationMatrix;
pub use von_kries::{ChromaticAdaptation, VonKriesAdaptation};
