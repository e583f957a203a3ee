//! Uniform JSON response envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business codes carried in the envelope `status` field.
///
/// These are independent of the HTTP status line.
pub mod codes {
    pub const OK: u32 = 200;
    pub const MALFORMED_INPUT: u32 = 4000;
    pub const STORAGE_FAILURE: u32 = 5000;
    pub const ADD_FAILED: u32 = 5004;
    pub const NOT_FOUND: u32 = 5005;
    pub const UPDATE_FAILED: u32 = 5006;
    pub const DELETE_FAILED: u32 = 5007;
}

/// Body of every API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: u32,
    pub message: String,
    /// Payload on success, `""` otherwise
    pub data: Value,
}

impl Envelope {
    /// Success envelope with message `ok`
    pub fn ok<T: Serialize>(data: &T) -> Self {
        Self::with_data(codes::OK, "ok", data)
    }

    pub fn with_data<T: Serialize>(status: u32, message: impl Into<String>, data: &T) -> Self {
        Self {
            status,
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or_else(|_| empty_data()),
        }
    }

    /// Envelope whose `data` is the empty string
    pub fn empty(status: u32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: empty_data(),
        }
    }
}

fn empty_data() -> Value {
    Value::String(String::new())
}

/// An envelope paired with the HTTP status it is sent with
#[derive(Debug, Clone)]
pub struct Reply {
    pub http: StatusCode,
    pub envelope: Envelope,
}

impl Reply {
    pub fn new(http: StatusCode, envelope: Envelope) -> Self {
        Self { http, envelope }
    }

    /// HTTP 200 with the given envelope
    pub fn ok(envelope: Envelope) -> Self {
        Self::new(StatusCode::OK, envelope)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.http, Json(self.envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_is_empty_string() {
        let envelope = Envelope::empty(codes::NOT_FOUND, "record not found");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": 5005, "message": "record not found", "data": ""})
        );
    }

    #[test]
    fn test_ok_wraps_payload() {
        let envelope = Envelope::ok(&vec![1, 2, 3]);

        assert_eq!(envelope.status, codes::OK);
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.data, serde_json::json!([1, 2, 3]));
    }
}
