//! # fxquant_models: analytics layer
//!
//! Closed-form option analytics and volatility smile reconstruction:
//! - Black-Scholes Greeks for the option panel (`analytical`)
//! - Risk-reversal/butterfly smile reconstruction (`smile`)
//!
//! ## Design principles
//!
//! - **Generic over `T: Float`**: usable with `f64` and `f32`
//! - **Validated inputs**: degenerate parameters (zero volatility, zero
//!   expiry) are rejected with typed errors instead of producing NaN
//! - **Pure functions**: no I/O, no shared state, deterministic for
//!   identical inputs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod smile;
