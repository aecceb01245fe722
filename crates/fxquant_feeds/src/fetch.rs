//! Fetch state machine for per-component market data loading.
//!
//! Each dashboard component owns one slot per endpoint and drives it
//! through `Idle -> Loading -> Success | Failed`. The slot has a single
//! writer and no locking; a request that resolves after a newer one
//! simply overwrites it, matching the polling model of the surrounding
//! system.

use chrono::{DateTime, Utc};
use tracing::debug;

/// Loading state of one fetch.
///
/// The explicit form of the loading/error/data triple: exactly one
/// variant holds at a time, so "loading with stale error text" states
/// cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No request has been made yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request resolved with data.
    Success(T),
    /// The last request failed.
    Failed(String),
}

impl<T> FetchState<T> {
    /// True before the first request.
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// True after a successful resolve.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    /// True after a failed resolve.
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    /// The resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Single-writer fetch slot for one endpoint.
///
/// # Example
///
/// ```
/// use fxquant_feeds::fetch::FetchSlot;
///
/// let mut slot: FetchSlot<Vec<f64>> = FetchSlot::new("usd-swap-curve");
/// assert!(slot.state().is_idle());
///
/// slot.start();
/// assert!(slot.state().is_loading());
///
/// slot.succeed(vec![0.0465, 0.0415]);
/// assert_eq!(slot.state().value().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    name: String,
    state: FetchState<T>,
    last_updated: Option<DateTime<Utc>>,
}

impl<T> FetchSlot<T> {
    /// Creates an idle slot. The name only appears in logs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: FetchState::Idle,
            last_updated: None,
        }
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Returns when the slot last resolved, successfully or not.
    #[inline]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Marks a request as in flight.
    ///
    /// Valid from any state: a manual retry restarts from `Failed`, a
    /// poll timer restarts from `Success`.
    pub fn start(&mut self) {
        debug!(slot = %self.name, "fetch started");
        self.state = FetchState::Loading;
    }

    /// Resolves the in-flight request with data.
    ///
    /// Overwrites whatever state is current; with overlapping requests
    /// the last resolve wins.
    pub fn succeed(&mut self, value: T) {
        debug!(slot = %self.name, "fetch succeeded");
        self.state = FetchState::Success(value);
        self.last_updated = Some(Utc::now());
    }

    /// Resolves the in-flight request with a failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(slot = %self.name, error = %message, "fetch failed");
        self.state = FetchState::Failed(message);
        self.last_updated = Some(Utc::now());
    }

    /// Returns the slot to `Idle`, discarding any data or error.
    pub fn reset(&mut self) {
        debug!(slot = %self.name, "fetch reset");
        self.state = FetchState::Idle;
        self.last_updated = None;
    }
}
