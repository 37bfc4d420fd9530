//! Color model conversion
//!
//! [`ColorSpaceConverter`] owns its configuration ([`ConverterOptions`]) and
//! converts between any two [`ColorSpace`] types, single values or slices.

mod bulk;
pub mod color_space;
pub mod converter;
pub mod options;

pub use color_space::ColorSpace;
pub use converter::ColorSpaceConverter;
pub use options::{Adaptation, ConverterOptions};
