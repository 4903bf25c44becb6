#![allow(clippy::unwrap_used)]
// Integration tests for `RentalClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rently_api::{Error, RentalClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RentalClient) {
    let server = MockServer::start().await;
    let client = RentalClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn api_path(suffix: &str) -> String {
    format!("/api/v1/{suffix}")
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "statusCode": 200, "message": "OK", "data": data })
}

// ── Envelope handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_guests() {
    let (server, client) = setup().await;

    let envelope = ok_envelope(json!([{
        "id": 7,
        "fullName": "Nguyễn Văn An",
        "phone": "0901234567",
        "citizenId": "079123456789"
    }]));

    Mock::given(method("GET"))
        .and(path(api_path("guests")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let guests = client.list_guests().await.unwrap();

    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].id, 7);
    assert_eq!(guests[0].full_name, "Nguyễn Văn An");
    assert_eq!(guests[0].phone.as_deref(), Some("0901234567"));
    assert!(guests[0].email.is_none());
}

#[tokio::test]
async fn test_envelope_error_status() {
    let (server, client) = setup().await;

    let envelope = json!({ "statusCode": 400, "message": "fullName is required" });

    Mock::given(method("POST"))
        .and(path(api_path("guests")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client
        .create_guest(&rently_api::types::GuestUpsert::default())
        .await;

    match result {
        Err(Error::Api {
            status_code,
            ref message,
        }) => {
            assert_eq!(status_code, 400);
            assert!(message.contains("fullName"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_envelope_without_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("guests")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 200 })))
        .mount(&server)
        .await;

    let result = client.list_guests().await;
    assert!(matches!(result, Err(Error::MissingData)));
}

// ── Auth gate ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_401_is_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.get_profile().await;
    assert!(matches!(result, Err(Error::SessionExpired)));
}

#[tokio::test]
async fn test_envelope_401_with_http_200_is_session_expired() {
    let (server, client) = setup().await;

    // Some middleware paths answer auth failures as HTTP 200 + statusCode 401.
    let envelope = json!({ "statusCode": 401, "message": "Unauthorized" });

    Mock::given(method("GET"))
        .and(path(api_path("users/profile")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client.get_profile().await;
    assert!(matches!(result, Err(Error::SessionExpired)));
}

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    let envelope = ok_envelope(json!({
        "accessToken": "tok-abc123",
        "user": { "id": "u1", "username": "admin" }
    }));

    Mock::given(method("POST"))
        .and(path(api_path("auth/login")))
        .and(body_partial_json(json!({ "username": "admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "test-password".to_owned().into();
    let resp = client.login("admin", &secret).await.unwrap();

    assert_eq!(resp.access_token, "tok-abc123");
    assert_eq!(resp.user.unwrap().username, "admin");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let (server, client) = setup().await;

    let envelope = json!({ "statusCode": 401, "message": "Unauthorized" });

    Mock::given(method("POST"))
        .and(path(api_path("auth/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_owned().into();
    let result = client.login("admin", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

// ── Request shapes ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_guest_sends_camel_case_body() {
    let (server, client) = setup().await;

    let envelope = ok_envelope(json!({ "id": 42, "fullName": "Trần Thị Bình" }));

    Mock::given(method("POST"))
        .and(path(api_path("guests")))
        .and(body_partial_json(json!({
            "fullName": "Trần Thị Bình",
            "citizenId": "079987654321"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_guest(&rently_api::types::GuestUpsert {
            full_name: Some("Trần Thị Bình".into()),
            citizen_id: Some("079987654321".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, 42);
}

#[tokio::test]
async fn test_search_guests_passes_query_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("guests/search")))
        .and(query_param("q", "an"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let found = client.search_guests("an").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_delete_unwraps_empty_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(api_path("guests/7")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 200 })))
        .mount(&server)
        .await;

    client.delete_guest(7).await.unwrap();
}

#[tokio::test]
async fn test_base_url_with_existing_api_prefix_is_not_doubled() {
    let server = MockServer::start().await;
    let client = RentalClient::from_reqwest(
        &format!("{}/api/v1", server.uri()),
        reqwest::Client::new(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = client.list_services().await.unwrap();
    assert!(services.is_empty());
}
