#![allow(clippy::unwrap_used)]
// Integration tests for `AnalyticsClient` — the only surface with a
// retry policy, so the tests count requests.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rently_api::{AnalyticsClient, Error, TransportConfig};

async fn setup() -> (MockServer, AnalyticsClient) {
    let server = MockServer::start().await;
    let client = AnalyticsClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

#[tokio::test]
async fn test_list_blocks() {
    let (server, client) = setup().await;

    let body = json!([{
        "number": 19000001,
        "hash": "0xabc",
        "transactionCount": 150,
        "mevTransactionCount": 4,
        "profitEth": 0.42
    }]);

    Mock::given(method("GET"))
        .and(path("/blocks"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let blocks = client.list_blocks(25).await.unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].number, 19_000_001);
    assert_eq!(blocks[0].mev_transaction_count, Some(4));
}

#[tokio::test]
async fn test_transient_failures_are_retried_then_succeed() {
    let (server, client) = setup().await;

    // Two 500s, then a good answer. The fixed 3-attempt policy should
    // absorb the failures.
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "hash": "0xdeadbeef",
            "blockNumber": 19000001,
            "kind": "sandwich"
        }])))
        .mount(&server)
        .await;

    let txs = client.list_transactions(10).await.unwrap();

    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].kind.as_deref(), Some("sandwich"));
}

#[tokio::test]
async fn test_retry_gives_up_after_fixed_attempts() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/blocks/19000001"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let result = client.get_block(19_000_001).await;

    assert!(
        matches!(result, Err(Error::Analytics { status: 503, .. })),
        "expected Analytics error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/transactions/0xmissing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get_transaction("0xmissing").await;

    assert!(result.as_ref().is_err_and(Error::is_not_found));
}

#[tokio::test]
async fn test_custom_retry_count() {
    let (server, client) = setup().await;
    let client = client.with_retry_attempts(1);

    Mock::given(method("GET"))
        .and(path("/blocks"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.list_blocks(5).await.is_err());
}
