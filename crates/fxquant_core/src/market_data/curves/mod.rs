//! Forward/yield curve construction.
//!
//! Curves are built from quoted anchor instruments (deposits, bonds,
//! swaps) and sampled at arbitrary maturities for display. Sampling
//! preserves quoted anchor values exactly and never extrapolates.

mod forward;

pub use forward::{CurveAnchor, CurvePoint, ForwardCurve, ANCHOR_TOLERANCE_YEARS};
