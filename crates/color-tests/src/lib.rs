//! # color-tests
//!
//! Golden-value and cross-library parity testing for oxcolor.
//!
//! This crate provides:
//! - Golden adaptation and color difference cases loaded from `data/golden.json`
//! - Seeded sample generators for property tests
//! - Difference statistics for comparing against palette
//!
//! ## Reference Implementations
//!
//! - **palette**: pure Rust color library, used for sRGB, XYZ, Lab, HSL and
//!   HSV parity

pub mod golden;
pub mod samples;
pub mod stats;

pub use golden::{AdaptationCase, DeltaECase, GoldenData, load_golden};
pub use samples::{random_rgb, random_saturated_rgb, random_xyz};
pub use stats::{DiffStats, hue_distance};
