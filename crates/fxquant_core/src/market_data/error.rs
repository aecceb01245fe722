//! Market data error types.

use crate::types::InterpolationError;
use thiserror::Error;

/// Market data operation errors.
///
/// Provides structured error handling for curve construction and sampling
/// with descriptive context for each failure mode.
///
/// # Examples
///
/// ```
/// use fxquant_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (non-positive time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Two anchors share the same maturity.
    #[error("Duplicate anchor maturity: t = {t}")]
    DuplicateMaturity {
        /// The duplicated maturity value
        t: f64,
    },

    /// Query point outside the anchor domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient anchors for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of anchors provided
        got: usize,
        /// Minimum number of anchors required
        need: usize,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}
