//! wapi2 API - HTTP client for the wapi2 messaging gateway.
//!
//! Every operation runs its input validators first, so invalid calls fail
//! without touching the network. Requests go out with bearer
//! authentication and a per-request timeout; responses are decoded into
//! `ApiResponse<T>` or classified into a single `WapiError`.
//!
//! ```no_run
//! use wapi_api::WapiClient;
//!
//! # async fn example() -> wapi_core::WapiResult<()> {
//! let client = WapiClient::with_token("my-token")?;
//! let session = client.create_session().await?;
//! client
//!     .send_message("5215512345678", "hola", &session.data.session_id)
//!     .await?;
//! client.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod content;
pub mod endpoints;
pub mod response;
pub mod validate;

// Re-export key types
pub use client::WapiClient;
pub use content::ContentEncoding;
pub use endpoints::messages::{
    ImageMessage, LocationMessage, OfficeDocumentMessage, PdfMessage, VideoMessage,
};
pub use response::ApiResponse;
pub use wapi_core::{ErrorKind, FileErrorKind, WapiError, WapiResult};
