//! Correlation types for request tracking
//!
//! A `RequestId` follows one HTTP request from the middleware through the
//! handler and store layers, and is echoed back to the caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header used to receive and echo a request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Unique identifier for a single request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reuse an id supplied by the caller.
    ///
    /// Blank or oversized values are replaced with a fresh id so a client
    /// cannot push arbitrary payloads into the logs.
    pub fn from_header(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 128 {
            return Self::new();
        }
        Self(trimmed.to_string())
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
