//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Every failure is surfaced immediately to the caller; no operation in this
/// crate retries, degrades, or falls back. Operations that can fail perform
/// no partial mutation: either every element is processed or none is.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A matrix extent is zero, so no buffer can be allocated for it.
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// A shape change was requested beyond the originally allocated capacity.
    CapacityExceeded {
        /// Elements the requested shape needs
        requested: usize,
        /// Elements the buffer was allocated with
        capacity: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid matrix dimensions: {rows}x{cols}, both extents must be nonzero"
                )
            }
            MatrizError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Capacity exceeded: requested shape needs {requested} elements, buffer holds {capacity}"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a dimension mismatch error from two (rows, cols) shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a dimension mismatch error for a flat buffer that is too short.
    #[must_use]
    pub fn buffer_too_short(needed: usize, len: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("at least {needed} elements"),
            actual: format!("{len} elements"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
