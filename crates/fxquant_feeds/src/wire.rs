//! Wire types for the reference-data service.
//!
//! The remote service speaks a single JSON request/response pair:
//!
//! ```json
//! { "securities": ["EURUSD Curncy"], "fields": ["PX_BID", "PX_ASK"] }
//! ```
//!
//! ```json
//! { "data": { "securities_data": [
//!     { "security": "EURUSD Curncy", "success": true,
//!       "fields": { "PX_BID": 1.0848, "PX_ASK": 1.0852 } }
//! ] } }
//! ```
//!
//! Every field value is a nullable number; extraction helpers propagate
//! nulls instead of defaulting them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Last price field.
pub const FIELD_PX_LAST: &str = "PX_LAST";
/// Bid price field.
pub const FIELD_PX_BID: &str = "PX_BID";
/// Ask price field.
pub const FIELD_PX_ASK: &str = "PX_ASK";

/// A reference-data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDataRequest {
    /// Securities to query.
    pub securities: Vec<String>,
    /// Fields to return per security.
    pub fields: Vec<String>,
}

impl ReferenceDataRequest {
    /// Creates a request.
    pub fn new(
        securities: impl IntoIterator<Item = impl Into<String>>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            securities: securities.into_iter().map(Into::into).collect(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Serialises the request to its JSON wire form.
    pub fn to_json(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A reference-data response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDataResponse {
    /// Response payload.
    pub data: ResponseData,
}

/// Response payload wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Per-security results, in request order.
    pub securities_data: Vec<SecurityData>,
}

impl ReferenceDataResponse {
    /// Parses a response from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Finds the result for a security, if present.
    pub fn security(&self, security: &str) -> Option<&SecurityData> {
        self.data
            .securities_data
            .iter()
            .find(|s| s.security == security)
    }
}

/// Result for a single security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityData {
    /// The queried security.
    pub security: String,
    /// Whether the service resolved the security.
    pub success: bool,
    /// Returned field values; a null means the field had no value.
    pub fields: BTreeMap<String, Option<f64>>,
}

impl SecurityData {
    /// Returns a field value.
    ///
    /// `None` both when the field is absent and when it is null.
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied().flatten()
    }

    /// Mid of a bid/ask field pair.
    ///
    /// `None` when either side is missing; a one-sided quote is a data
    /// gap, not half a mid.
    pub fn mid(&self, bid_field: &str, ask_field: &str) -> Option<f64> {
        let bid = self.field(bid_field)?;
        let ask = self.field(ask_field)?;
        Some((bid + ask) / 2.0)
    }
}
