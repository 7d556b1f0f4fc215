//! Server response envelope and response classification.
//!
//! Successful wapi2 responses share one envelope:
//! ```json
//! { "status": "success", "message": "Session created", "data": { ... } }
//! ```
//! Failed responses carry an arbitrary JSON object (usually with `message`
//! or `error`) or plain text. `parse_response` turns a status code and raw
//! body into either the typed envelope or a classified `WapiError`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use wapi_core::error::{ErrorPayload, WapiError, WapiResult};

/// Standard response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Server-defined success token; not interpreted by the client.
    #[serde(default, deserialize_with = "status_token")]
    pub status: String,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Operation result; the type's default when the server omits it.
    #[serde(default)]
    pub data: T,
}

/// Accept string, number or boolean status tokens as text.
fn status_token<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Classify a completed HTTP exchange.
///
/// 1. An empty body is a Server error regardless of status.
/// 2. A non-2xx status is mapped through the status table with the parsed
///    error payload attached.
/// 3. A 2xx body that does not decode is a Validation error carrying the raw
///    body under `content`.
pub fn parse_response<T>(status: u16, body: &str) -> WapiResult<ApiResponse<T>>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return Err(WapiError::server("server returned no response", 500, None));
    }

    if !(200..300).contains(&status) {
        return Err(error_from_response(status, body));
    }

    serde_json::from_str(body).map_err(|e| {
        let mut payload = ErrorPayload::new();
        payload.insert("content".into(), Value::String(body.to_string()));
        WapiError::Validation {
            message: format!("failed to parse server response: {e}"),
            status,
            file_error: None,
            payload: Some(payload),
        }
    })
}

/// Build the error for a non-success response body.
pub fn error_from_response(status: u16, body: &str) -> WapiError {
    let (detail, payload) = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => (extract_message(&map), Some(map)),
        _ => (body.to_string(), None),
    };
    WapiError::from_status(format!("{}: {detail}", status_prefix(status)), status, payload)
}

/// `message`, then `error`, then a generic fallback.
fn extract_message(map: &ErrorPayload) -> String {
    ["message", "error"]
        .iter()
        .find_map(|key| match map.get(*key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Message framing per status; 403 reads differently from 401.
fn status_prefix(status: u16) -> &'static str {
    match status {
        400 => "validation error",
        401 => "authentication error",
        403 => "permission denied",
        404 => "session not found",
        429 => "rate limit exceeded",
        500..=504 => "server error",
        _ => "request failed",
    }
}
