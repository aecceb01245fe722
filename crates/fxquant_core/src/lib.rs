//! # fxquant_core: foundation layer for the fxquant workspace
//!
//! This crate is the bottom layer of the workspace and provides:
//! - Currency types (`types::currency`)
//! - Error types shared across layers (`types::error`)
//! - Interpolation primitives (`math::interpolators`)
//! - Forward/yield curve construction (`market_data::curves`)
//!
//! ## Zero dependency principle
//!
//! The foundation layer depends on no other fxquant crate and keeps external
//! dependencies minimal:
//! - num-traits: generic numerical computation over `Float`
//! - thiserror: structured error types
//! - serde: serialisation support (optional)
//!
//! ## Usage
//!
//! ```rust
//! use fxquant_core::market_data::curves::{CurveAnchor, ForwardCurve};
//! use fxquant_core::types::Currency;
//!
//! let usd: Currency = "usd".parse().unwrap();
//! assert_eq!(usd.code(), "USD");
//!
//! let anchors = vec![
//!     CurveAnchor::new(1.0, 0.051, "1Y", "US0012M Index"),
//!     CurveAnchor::new(2.0, 0.0465, "2Y", "USSW2 Curncy"),
//! ];
//! let curve = ForwardCurve::new(anchors).unwrap();
//! let rate = curve.rate_at(1.5).unwrap();
//! assert!(rate > 0.0465 && rate < 0.051);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
