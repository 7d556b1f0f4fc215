//! Session entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a server-side messaging session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SessionStatus {
    #[default]
    Initializing,
    QrReady,
    Authenticated,
    Ready,
    Disconnected,
    Failed,
}

impl SessionStatus {
    const ALL: [SessionStatus; 6] = [
        Self::Initializing,
        Self::QrReady,
        Self::Authenticated,
        Self::Ready,
        Self::Disconnected,
        Self::Failed,
    ];

    const NAMES: &'static [&'static str] = &[
        "Initializing",
        "QrReady",
        "Authenticated",
        "Ready",
        "Disconnected",
        "Failed",
    ];

    /// Status for a numeric ordinal as sent by some server versions.
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        Self::ALL.get(usize::try_from(ordinal).ok()?).copied()
    }

    /// Whether the session can send messages.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Ready)
    }

    /// Whether the session ended and needs to be recreated.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Disconnected | Self::Failed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAMES[*self as usize])
    }
}

/// Error returned when a status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown session status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for SessionStatus {
    type Err = UnknownStatus;

    /// Case-insensitive; `qr_ready`, `QR-READY` and `qrReady` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "initializing" => Ok(Self::Initializing),
            "qrready" => Ok(Self::QrReady),
            "authenticated" => Ok(Self::Authenticated),
            "ready" => Ok(Self::Ready),
            "disconnected" => Ok(Self::Disconnected),
            "failed" => Ok(Self::Failed),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatusVisitor;

        impl<'de> Visitor<'de> for StatusVisitor {
            type Value = SessionStatus;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a session status name or ordinal")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map_err(|_| E::unknown_variant(v, SessionStatus::NAMES))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                SessionStatus::from_ordinal(v)
                    .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(SessionStatus::from_ordinal)
                    .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}

/// A messaging session as reported by the server.
///
/// Created server-side by the session-creation call; the client only
/// forwards it. `session_id` scopes every other operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, alias = "session_id")]
    pub session_id: String,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default, alias = "phone_number", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, alias = "created_at", deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "last_activity", deserialize_with = "lenient_timestamp")]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default, alias = "error_message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Session {
    /// Whether the session can be used to send messages.
    pub fn is_usable(&self) -> bool {
        !self.session_id.is_empty() && self.status.is_usable()
    }
}

/// ISO-8601 timestamp with or without an offset; offset-less values are UTC.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| de::Error::invalid_value(Unexpected::Str(&raw), &"an ISO-8601 timestamp"))
}
