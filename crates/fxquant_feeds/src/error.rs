//! Feed error types.

use thiserror::Error;

/// Market data feed errors.
///
/// Per-security failures are local: a failed or incomplete security is
/// skipped and reported without invalidating the rest of the response.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The service flagged the security request as unsuccessful.
    #[error("Security request failed: {security}")]
    SecurityFailed {
        /// The security that failed
        security: String,
    },

    /// A required field was null or absent for a security.
    #[error("Missing field {field} for {security}")]
    MissingField {
        /// The affected security
        security: String,
        /// The field that was missing
        field: String,
    },

    /// The response payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
