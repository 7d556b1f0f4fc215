//! wapi2 Core - Foundation types shared by the client SDK crates.
//!
//! This crate provides:
//! - The closed error taxonomy every API operation reports through
//! - Client configuration (base URL, auth token, timeout) persisted as TOML
//! - Structured logging with tracing
//! - Process-wide validation limits

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ClientConfig};
pub use error::{ErrorKind, ErrorPayload, FileErrorKind, WapiError, WapiResult};
pub use logging::{init_logging, LogInitError};
