//! Error types for parsing widget values in comfort-types.

use thiserror::Error;

/// Errors that can occur when parsing widget values from text.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Text is not a finite number in range.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Text is not a unit code (`"C"` or `"F"`).
    #[error("Invalid unit: {0:?} (expected \"C\" or \"F\")")]
    InvalidUnit(String),
}
