//! Closed-form option analytics.
//!
//! This module provides:
//! - Black-Scholes pricing and Greeks (`greeks`)
//! - Standard normal distribution functions (`distributions`)
//!
//! All formulas are deterministic closed forms; there is no calibration
//! and no numerical solving anywhere in this module.

pub mod distributions;
pub mod error;
pub mod greeks;

pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{BlackScholesGreeks, GreeksResult, OptionInputs, OptionKind};
