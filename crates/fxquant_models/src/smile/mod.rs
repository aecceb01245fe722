//! Volatility smile reconstruction from market quotes.
//!
//! FX volatility is quoted per tenor as an at-the-money level plus
//! risk-reversal and butterfly spreads at fixed delta buckets. This
//! module rebuilds the put/call implied-volatility points from those
//! quotes:
//!
//! ```text
//! σ_put(δ)  = σ_atm - rr(δ)/2 + bf(δ)
//! σ_call(δ) = σ_atm + rr(δ)/2 + bf(δ)
//! ```

pub mod error;
pub mod reconstructor;

pub use error::SmileError;
pub use reconstructor::{
    reconstruct, BucketQuote, DeltaBucket, MissingQuote, MissingQuotePolicy, QuoteGap,
    SmilePoint, SmileSlice,
};
