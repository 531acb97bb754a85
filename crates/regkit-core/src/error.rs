//! Error types for interpolation and transform operations.
//!
//! Only deterministic configuration mismatches are reported here. Numerical
//! corner cases such as a zero kernel displacement are resolved in place and
//! never surface as errors.

use thiserror::Error;

/// Main error type for the numeric core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An operation has no implementation for the image dimensionality.
    ///
    /// The same dimensionality always fails the same way, so callers should
    /// treat this as a build or configuration mismatch, not a transient fault.
    #[error("{operation} is not implemented for this dimension ({dimension})")]
    UnsupportedDimensionality {
        operation: &'static str,
        dimension: usize,
    },

    /// Dimension mismatch between collaborating inputs.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Shape mismatch.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an unsupported dimensionality error.
    pub fn unsupported_dimensionality(operation: &'static str, dimension: usize) -> Self {
        Self::UnsupportedDimensionality { operation, dimension }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
