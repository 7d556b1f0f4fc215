//! Integration tests for session and authentication endpoints.

mod common;

use common::{client_for, envelope, SESSION, TOKEN};
use serde_json::json;
use wapi_api::ErrorKind;
use wapi_models::SessionStatus;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn create_session_posts_with_default_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/newsession"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "sessionId": SESSION,
            "status": "Initializing",
            "createdAt": "2024-05-01T10:00:00Z",
            "lastActivity": "2024-05-01T10:00:00Z"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).create_session().await.unwrap();
    assert_eq!(resp.status, "success");
    assert_eq!(resp.data.session_id, SESSION);
    assert_eq!(resp.data.status, SessionStatus::Initializing);
    assert!(resp.data.created_at.is_some());
}

#[tokio::test]
async fn check_auth_embeds_session_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/auth/checkauth/{SESSION}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "sessionId": SESSION,
            "status": "Ready",
            "phoneNumber": "5215512345678"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).check_auth(SESSION).await.unwrap();
    assert!(resp.data.is_usable());
    assert_eq!(resp.data.phone_number.as_deref(), Some("5215512345678"));
}

#[tokio::test]
async fn get_sessions_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/getsessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "sessionId": "a", "status": "Ready" },
            { "sessionId": "b", "status": "Failed", "errorMessage": "banned" }
        ]))))
        .mount(&server)
        .await;

    let resp = client_for(&server).get_sessions().await.unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[1].status, SessionStatus::Failed);
    assert_eq!(resp.data[1].error_message.as_deref(), Some("banned"));
}

#[tokio::test]
async fn logout_posts_to_session_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/auth/logout/{SESSION}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "message": "logged out" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).logout(SESSION).await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("logged out"));
    assert!(resp.data.is_null());
}

#[tokio::test]
async fn get_qr_code_uses_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/getqr"))
        .and(query_param("session_id", SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!("data:image/png;base64,iVBORw0KGgo="))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).get_qr_code(SESSION).await.unwrap();
    assert!(resp.data.starts_with("data:image/png"));
}

#[tokio::test]
async fn unknown_session_is_session_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/checkauth/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "session missing does not exist" })))
        .mount(&server)
        .await;

    let err = client_for(&server).check_auth("missing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Session);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.message(), "session not found: session missing does not exist");
    assert_eq!(err.payload().unwrap()["message"], "session missing does not exist");
}

#[tokio::test]
async fn bad_token_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/getsessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid token" })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_sessions().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.message(), "authentication error: invalid token");
    assert!(!err.is_transient());
}
