//! Session and authentication endpoints.

use serde_json::Value;
use wapi_core::error::WapiResult;
use wapi_models::Session;

use crate::client::WapiClient;
use crate::response::ApiResponse;
use crate::validate;

impl WapiClient {
    /// Create a new session. The returned `session_id` scopes every other call.
    pub async fn create_session(&self) -> WapiResult<ApiResponse<Session>> {
        let url = self.endpoint(&["auth", "newsession"], None)?;
        self.post_empty(url).await
    }

    /// Get the current authentication state of a session.
    pub async fn check_auth(&self, session_id: &str) -> WapiResult<ApiResponse<Session>> {
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["auth", "checkauth", session_id], None)?;
        self.get(url).await
    }

    /// List all sessions owned by the token.
    pub async fn get_sessions(&self) -> WapiResult<ApiResponse<Vec<Session>>> {
        let url = self.endpoint(&["auth", "getsessions"], None)?;
        self.get(url).await
    }

    /// Log a session out on the server.
    pub async fn logout(&self, session_id: &str) -> WapiResult<ApiResponse<Value>> {
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["auth", "logout", session_id], None)?;
        self.post_empty(url).await
    }

    /// Get the pairing QR code for a session that is not yet authenticated.
    pub async fn get_qr_code(&self, session_id: &str) -> WapiResult<ApiResponse<String>> {
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["auth", "getqr"], Some(session_id))?;
        self.get(url).await
    }
}
