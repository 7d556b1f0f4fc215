//! Shared test utilities for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wapi_api::WapiClient;
use wapi_core::config::ClientConfig;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const SESSION: &str = "session-1";
pub const PHONE: &str = "5215512345678";

/// Client pointed at the mock server with the default timeout.
pub fn client_for(server: &MockServer) -> WapiClient {
    client_with_timeout(&server.uri(), 30_000)
}

/// Client for an arbitrary base URL and timeout.
pub fn client_with_timeout(base_url: &str, timeout_ms: u64) -> WapiClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        token: TOKEN.to_string(),
        timeout_ms,
        ..ClientConfig::default()
    };
    WapiClient::new(&config).expect("failed to build test client")
}

/// Wrap `data` in a success envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "status": "success", "message": "ok", "data": data })
}

/// Assert the mock server saw no requests at all.
pub async fn assert_no_requests(server: &MockServer) {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(
        requests.is_empty(),
        "expected no requests, got {}",
        requests.len()
    );
}
