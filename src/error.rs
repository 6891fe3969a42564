//! Error types for the caesarshift library.

use std::fmt;

/// Validation errors produced at the loosely typed [`transform`] boundary.
///
/// All three conditions are detected by upfront validation before any
/// transformation work begins; none of them is retryable, since each one
/// indicates a caller contract violation.
///
/// [`transform`]: crate::transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaesarShiftError {
    /// The shift argument was not supplied.
    MissingShift,
    /// The text argument is not a textual value.
    InvalidTextType,
    /// The shift argument is not an integer value.
    InvalidShiftType,
}

impl fmt::Display for CaesarShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaesarShiftError::MissingShift => {
                write!(f, "Shift argument is required but was not supplied")
            }
            CaesarShiftError::InvalidTextType => {
                write!(f, "Text argument must be a textual value")
            }
            CaesarShiftError::InvalidShiftType => {
                write!(f, "Shift argument must be an integer value")
            }
        }
    }
}

impl std::error::Error for CaesarShiftError {}
