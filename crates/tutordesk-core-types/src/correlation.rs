//! Request correlation
//!
//! Every HTTP request gets a `RequestId`, either echoed from the caller's
//! `x-request-id` header or freshly generated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest caller-supplied id that is echoed back verbatim
const MAX_INBOUND_LEN: usize = 128;

/// Unique identifier for a single request or CLI invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Accept an inbound id if it is short, non-empty visible ASCII;
    /// otherwise generate a fresh one.
    pub fn from_inbound(value: Option<&str>) -> Self {
        match value {
            Some(v)
                if !v.is_empty()
                    && v.len() <= MAX_INBOUND_LEN
                    && v.bytes().all(|b| b.is_ascii_graphic()) =>
            {
                Self(v.to_string())
            }
            _ => Self::new(),
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
