//! Error types for smile reconstruction.

use thiserror::Error;

/// Smile reconstruction errors.
///
/// Per-bucket data gaps are not errors; they are reported on the
/// reconstructed slice so that one missing quote never invalidates the
/// other buckets.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SmileError {
    /// The at-the-money volatility is missing its valid domain.
    #[error("Invalid ATM volatility: σ = {atm_vol}")]
    InvalidAtmVol {
        /// The invalid ATM volatility value
        atm_vol: f64,
    },
}
