//! API endpoint modules organized by category.
//!
//! Each module adds typed methods to `WapiClient` for one group of
//! related server endpoints.

pub mod auth;
pub mod contacts;
pub mod messages;
