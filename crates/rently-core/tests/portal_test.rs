#![allow(clippy::unwrap_used)]
// Integration tests for the portal: session gate + cache behavior
// against a wiremock backend. Request counts are the assertion of
// interest — they prove what the cache did and did not fetch.

use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rently_core::{
    CacheWindows, CoreError, CreateGuestRequest, Credentials, Portal, PortalConfig, SessionState,
    TlsVerification,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn config_for(server: &MockServer) -> PortalConfig {
    PortalConfig {
        backend_url: server.uri().parse().unwrap(),
        analytics_url: None,
        auth: Credentials::Token(SecretString::from("tok-test".to_owned())),
        tls: TlsVerification::System,
        timeout: Duration::from_secs(5),
        cache: CacheWindows::default(),
    }
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "statusCode": 200, "message": "OK", "data": data })
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "id": "u1",
            "username": "admin"
        }))))
        .mount(server)
        .await;
}

async fn connected_portal(server: &MockServer) -> Portal {
    mount_profile(server).await;
    let portal = Portal::new(config_for(server));
    portal.connect().await.unwrap();
    portal
}

// ── Auth gate ───────────────────────────────────────────────────────

#[tokio::test]
async fn connect_with_valid_token_signs_in() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    assert_eq!(
        portal.session(),
        SessionState::SignedIn {
            username: "admin".into()
        }
    );
    assert_eq!(portal.profile().unwrap().username, "admin");
}

#[tokio::test]
async fn connect_with_rejected_token_stays_signed_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 401, "message": "Unauthorized" })),
        )
        .mount(&server)
        .await;

    let portal = Portal::new(config_for(&server));
    let result = portal.connect().await;

    assert!(matches!(
        result,
        Err(CoreError::AuthenticationFailed { .. })
    ));
    assert_eq!(portal.session(), SessionState::SignedOut);
}

#[tokio::test]
async fn mid_session_401_flips_state_to_expired() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/guests"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = portal.guests().await;

    assert!(matches!(result, Err(CoreError::SessionExpired)));
    assert_eq!(portal.session(), SessionState::Expired);
}

#[tokio::test]
async fn queries_before_connect_are_rejected() {
    let server = MockServer::start().await;
    let portal = Portal::new(config_for(&server));

    assert!(matches!(portal.guests().await, Err(CoreError::NotSignedIn)));
}

// ── Cache behavior ──────────────────────────────────────────────────

#[tokio::test]
async fn fresh_list_is_served_without_a_second_request() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "id": 1, "fullName": "Nguyễn Văn An" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let first = portal.guests().await.unwrap();
    let second = portal.guests().await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[tokio::test]
async fn empty_search_never_issues_a_request() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/guests/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let found = portal.search_guests("").await.unwrap();
    assert!(found.is_empty());

    let found = portal.search_guests("   ").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn non_empty_search_issues_a_request_and_caches() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/guests/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "id": 2, "fullName": "Trần Thị Bình" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let first = portal.search_guests("bình").await.unwrap();
    let second = portal.search_guests("bình").await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[tokio::test]
async fn creating_a_guest_invalidates_the_list_key() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    // The list endpoint must be hit twice: once before the create, once
    // after the invalidation forced a refetch.
    Mock::given(method("GET"))
        .and(path("/api/v1/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "id": 1, "fullName": "Nguyễn Văn An" }
        ]))))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(
            { "id": 2, "fullName": "Trần Thị Bình" }
        ))))
        .expect(1)
        .mount(&server)
        .await;

    portal.guests().await.unwrap();

    portal
        .create_guest(CreateGuestRequest {
            full_name: "Trần Thị Bình".into(),
            phone: None,
            email: None,
            citizen_id: None,
            address: None,
            note: None,
        })
        .await
        .unwrap();

    portal.guests().await.unwrap();
}

#[tokio::test]
async fn created_entity_is_cached_under_its_detail_key() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(
            { "id": 9, "fullName": "Phạm Văn Em" }
        ))))
        .mount(&server)
        .await;

    // No GET mock for guests/9 — the detail read must come from cache.
    portal
        .create_guest(CreateGuestRequest {
            full_name: "Phạm Văn Em".into(),
            phone: None,
            email: None,
            citizen_id: None,
            address: None,
            note: None,
        })
        .await
        .unwrap();

    let detail = portal.guest(9).await.unwrap();
    assert_eq!(detail.full_name, "Phạm Văn Em");
}

#[tokio::test]
async fn logout_clears_the_cache_and_session() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 200 })))
        .mount(&server)
        .await;

    portal.guests().await.unwrap();
    portal.logout().await;

    assert_eq!(portal.session(), SessionState::SignedOut);
    assert!(matches!(portal.guests().await, Err(CoreError::NotSignedIn)));
}

// ── MEV without analytics URL ───────────────────────────────────────

#[tokio::test]
async fn mev_queries_error_cleanly_without_analytics_url() {
    let server = MockServer::start().await;
    let portal = connected_portal(&server).await;

    assert!(matches!(
        portal.mev_blocks(10).await,
        Err(CoreError::AnalyticsUnavailable)
    ));
}
