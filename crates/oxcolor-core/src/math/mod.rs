//! Mathematical operations for color conversion
//!
//! - 3x3 matrix operations for RGB↔XYZ and XYZ↔LMS transforms
//! - Element-wise vector arithmetic for per-channel gains

pub mod matrix;
pub mod vector;

pub use matrix::Matrix3x3;
