//! Integration tests for contact and group endpoints.

mod common;

use common::{assert_no_requests, client_for, envelope, PHONE, SESSION};
use serde_json::json;
use wapi_api::ErrorKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_contacts_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contact/getcontacts"))
        .and(query_param("session_id", SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": "1@c.us", "name": "Ana", "number": "1" },
            { "id": "2@c.us", "name": null, "number": "2" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).get_contacts(SESSION).await.unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].display_name(), "Ana");
    assert_eq!(resp.data[1].display_name(), "2");
}

#[tokio::test]
async fn get_contact_by_phone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/contact/getcontact/{PHONE}")))
        .and(query_param("session_id", SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": format!("{PHONE}@c.us"),
            "name": "Luis",
            "number": PHONE
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).get_contact(PHONE, SESSION).await.unwrap();
    assert_eq!(resp.data.number, PHONE);
    assert_eq!(resp.data.name.as_deref(), Some("Luis"));
}

#[tokio::test]
async fn get_profile_picture_returns_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/contact/getprofilepic/{PHONE}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!("https://pps.example.com/p.jpg"))),
        )
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_profile_picture(PHONE, SESSION)
        .await
        .unwrap();
    assert_eq!(resp.data, "https://pps.example.com/p.jpg");
}

#[tokio::test]
async fn is_registered_user_returns_bool() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/contact/isregistereduser/{PHONE}")))
        .and(query_param("session_id", SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(true))))
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .is_registered_user(PHONE, SESSION)
        .await
        .unwrap();
    assert!(resp.data);
}

#[tokio::test]
async fn get_groups_decodes_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contact/getgroups"))
        .and(query_param("session_id", SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": "1@g.us", "name": "Familia", "isAdmin": true, "canPost": true },
            { "id": "2@g.us", "name": "Avisos", "isAdmin": false, "canPost": false }
        ]))))
        .mount(&server)
        .await;

    let resp = client_for(&server).get_groups(SESSION).await.unwrap();
    assert!(resp.data[0].is_admin);
    assert!(!resp.data[1].can_post);
}

#[tokio::test]
async fn missing_phone_never_reaches_network() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.get_profile_picture("", SESSION).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let err = client.get_groups("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    assert_no_requests(&server).await;
}
