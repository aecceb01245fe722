//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurrencyError`: errors from currency parsing
//! - `InterpolationError`: errors from interpolation operations

use thiserror::Error;

/// Currency parsing errors.
///
/// # Examples
/// ```
/// use fxquant_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown or unsupported currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Interpolation errors.
///
/// Provides structured error handling for interpolation operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: query point outside the valid interpolation domain
/// - `InsufficientData`: not enough knot points for interpolation
/// - `NonMonotonicData`: knots are not strictly increasing
/// - `InvalidInput`: general invalid input
///
/// # Examples
/// ```
/// use fxquant_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside the valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient knot points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Knots are not strictly increasing.
    #[error("Data is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where the ordering violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
