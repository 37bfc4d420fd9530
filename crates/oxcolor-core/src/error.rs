//! Error types for oxcolor

use crate::color::Xyz;
use thiserror::Error;

/// Result type for oxcolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcolor operations
///
/// Every variant except [`Error::BufferSize`] is a configuration error:
/// it is reported when a converter is built, never while converting.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A transformation matrix has no inverse
    #[error("Singular matrix: {0}")]
    SingularMatrix(&'static str),

    /// A white point has a zero, negative or non-finite component
    #[error("Invalid white point {name}: {xyz:?}")]
    InvalidWhitePoint { name: &'static str, xyz: Xyz },

    /// Unknown preset name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
