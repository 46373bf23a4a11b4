//! Error types for argcheck

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using argcheck's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating fixtures, evaluating the argument
/// operation, or validating its output
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch between two samples, or between data and a shape
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// An element pair fell outside the comparison tolerance
    #[error(
        "Tolerance violation at index {index}: expected {expected}, got {actual} (diff={diff}, tol={tol})"
    )]
    ToleranceViolation {
        /// First violating index
        index: usize,
        /// Reference value
        expected: f64,
        /// Value under test
        actual: f64,
        /// Absolute difference
        diff: f64,
        /// Allowed difference at this index
        tol: f64,
    },

    /// Invalid fixture parameters
    #[error("Invalid fixture parameter '{arg}': {reason}")]
    Generation {
        /// The parameter name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between a sample and the requested element type
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Stored dtype
        lhs: DType,
        /// Requested dtype
        rhs: DType,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a fixture generation error
    pub fn generation(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::Generation {
            arg,
            reason: reason.into(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
