//! # fxquant_feeds: market data layer
//!
//! Everything between the remote reference-data service and the
//! analytics crates:
//! - Wire types for the JSON request/response contract (`wire`)
//! - Static per-currency curve instrument tables (`tickers`)
//! - Fetch state machine for per-component loading state (`fetch`)
//! - A synthetic snapshot provider for tests and demos (`snapshot`)
//!
//! The layer is deliberately synchronous and lock-free: every dashboard
//! component owns its own fetch slot and polls independently, so there
//! is no shared cache, request coalescing or cancellation here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod fetch;
pub mod snapshot;
pub mod tickers;
pub mod wire;

pub use error::FeedError;
pub use fetch::{FetchSlot, FetchState};
pub use wire::{ReferenceDataRequest, ReferenceDataResponse, SecurityData};
