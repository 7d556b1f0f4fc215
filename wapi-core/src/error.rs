//! Error taxonomy for the wapi2 client SDK.
//!
//! Every failed operation yields exactly one `WapiError`. The variants form
//! a closed set of kinds that callers branch on (retry, re-authenticate,
//! fix input); kind-specific details such as the rate-limit hint or the
//! file-validation sub-kind live on the variant that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Convenience type alias for Results using WapiError.
pub type WapiResult<T> = Result<T, WapiError>;

/// Structured error body attached to a failure (arbitrary JSON object).
pub type ErrorPayload = serde_json::Map<String, Value>;

/// Closed set of error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Unknown,
    Validation,
    Authentication,
    Session,
    Network,
    Server,
    RateLimit,
}

impl ErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 | 403 => Self::Authentication,
            404 => Self::Session,
            429 => Self::RateLimit,
            500..=504 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Stable lowercase name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Session => "session",
            Self::Network => "network",
            Self::Server => "server",
            Self::RateLimit => "rate_limit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-kind of a client-side file validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileErrorKind {
    /// Decoded Base64 content is larger than the allowed maximum.
    SizeExceeded,
    /// Wrong file extension or media format.
    InvalidFormat,
    /// Content is neither an http(s) URL nor Base64 text.
    InvalidContent,
    /// Content decodes to zero bytes.
    EmptyFile,
}

/// Unified error type for every wapi2 operation.
#[derive(Error, Debug, Clone)]
pub enum WapiError {
    /// Input rejected before any request was sent, a 400 from the server,
    /// or a success response whose body could not be decoded.
    #[error("{message}")]
    Validation {
        message: String,
        /// 0 for client-side checks.
        status: u16,
        /// Set only for file/media content checks.
        file_error: Option<FileErrorKind>,
        payload: Option<ErrorPayload>,
    },

    /// 401 (bad credentials) or 403 (permission denied).
    #[error("{message}")]
    Authentication {
        message: String,
        status: u16,
        payload: Option<ErrorPayload>,
    },

    /// 404: the session (or resource scoped to it) does not exist.
    #[error("{message}")]
    Session {
        message: String,
        payload: Option<ErrorPayload>,
    },

    /// The request never produced a response (connection failure, timeout).
    #[error("{message}")]
    Network { message: String },

    /// 5xx responses, empty responses and unexpected client failures.
    #[error("{message}")]
    Server {
        message: String,
        status: u16,
        payload: Option<ErrorPayload>,
    },

    /// 429 with the optional `retry_after` hint from the payload.
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
        payload: Option<ErrorPayload>,
    },

    /// Any status outside the classification table.
    #[error("{message}")]
    Unknown {
        message: String,
        status: u16,
        payload: Option<ErrorPayload>,
    },
}

impl WapiError {
    /// Client-side validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            status: 0,
            file_error: None,
            payload: None,
        }
    }

    /// Client-side file/media validation failure.
    pub fn file_validation(message: impl Into<String>, file_error: FileErrorKind) -> Self {
        Self::Validation {
            message: message.into(),
            status: 0,
            file_error: Some(file_error),
            payload: None,
        }
    }

    /// Transport-level failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// The request exceeded the configured timeout.
    pub fn timeout() -> Self {
        Self::network("request timed out")
    }

    /// Server-kind error with an explicit status.
    pub fn server(message: impl Into<String>, status: u16, payload: Option<ErrorPayload>) -> Self {
        Self::Server {
            message: message.into(),
            status,
            payload,
        }
    }

    /// Unexpected failure inside the client. The trace is kept in the
    /// payload for diagnostics and never appears in the message.
    pub fn unexpected(error: impl fmt::Display, trace: impl Into<String>) -> Self {
        let error = error.to_string();
        let mut payload = ErrorPayload::new();
        payload.insert("error".into(), Value::String(error.clone()));
        payload.insert("trace".into(), Value::String(trace.into()));
        Self::server(format!("unexpected error: {error}"), 500, Some(payload))
    }

    /// Unknown-kind error not tied to an HTTP exchange.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
            status: 0,
            payload: None,
        }
    }

    /// Build the error matching an HTTP status code.
    pub fn from_status(
        message: impl Into<String>,
        status: u16,
        payload: Option<ErrorPayload>,
    ) -> Self {
        let message = message.into();
        match ErrorKind::from_status(status) {
            ErrorKind::Validation => Self::Validation {
                message,
                status,
                file_error: None,
                payload,
            },
            ErrorKind::Authentication => Self::Authentication {
                message,
                status,
                payload,
            },
            ErrorKind::Session => Self::Session { message, payload },
            ErrorKind::RateLimit => Self::RateLimit {
                message,
                retry_after: payload.as_ref().and_then(parse_retry_after),
                payload,
            },
            ErrorKind::Server => Self::Server {
                message,
                status,
                payload,
            },
            ErrorKind::Network | ErrorKind::Unknown => Self::Unknown {
                message,
                status,
                payload,
            },
        }
    }

    /// The taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Session { .. } => ErrorKind::Session,
            Self::Network { .. } => ErrorKind::Network,
            Self::Server { .. } => ErrorKind::Server,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status associated with the error, 0 when none applies.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { status, .. }
            | Self::Authentication { status, .. }
            | Self::Server { status, .. }
            | Self::Unknown { status, .. } => *status,
            Self::Session { .. } => 404,
            Self::RateLimit { .. } => 429,
            Self::Network { .. } => 0,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Authentication { message, .. }
            | Self::Session { message, .. }
            | Self::Network { message }
            | Self::Server { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Unknown { message, .. } => message,
        }
    }

    /// Structured payload attached to the error, if any.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Validation { payload, .. }
            | Self::Authentication { payload, .. }
            | Self::Session { payload, .. }
            | Self::Server { payload, .. }
            | Self::RateLimit { payload, .. }
            | Self::Unknown { payload, .. } => payload.as_ref(),
            Self::Network { .. } => None,
        }
    }

    /// Seconds the server asked the caller to wait (rate limiting only).
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// File validation sub-kind, if this is a file validation failure.
    pub fn file_error(&self) -> Option<FileErrorKind> {
        match self {
            Self::Validation { file_error, .. } => *file_error,
            _ => None,
        }
    }

    /// Whether a caller might reasonably retry the same call later.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::RateLimit { .. })
    }
}

/// Read `retry_after` as whole seconds from an integer, float or numeric string.
fn parse_retry_after(payload: &ErrorPayload) -> Option<u64> {
    match payload.get("retry_after")? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64))
        }
        _ => None,
    }
}
