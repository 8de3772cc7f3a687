//! Interact endpoint tests.
//!
//! This module tests the single outbound HTTP call:
//! - URL composition from the endpoint selection
//! - Verbatim payload passthrough with a JSON content type
//! - Request id format on the wire
//! - Error mapping for non-success statuses and non-JSON bodies

mod common;

use common::*;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};

use edgewatch_client::ClientError;
use edgewatch_config::{ApiVersion, EndpointParams, Region};

#[tokio::test]
async fn test_interact_posts_payload_verbatim() {
    let mock_server = MockServer::start().await;
    let payload = json!({"event": {"xdm": {"eventType": "decisioning.propositionFetch"}}});

    Mock::given(method("POST"))
        .and(path("/ee/ind1/v1/interact"))
        .and(query_param("configId", "11111111-2222-3333-4444-555555555555"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client
        .interact(&test_endpoint(), Uuid::new_v4(), &payload)
        .await;

    assert_eq!(result.unwrap(), json!({"handle": []}));
}

#[tokio::test]
async fn test_interact_url_reflects_region_and_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ee/ore1/v2/interact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = EndpointParams {
        region: Region::Ore1,
        api_version: ApiVersion::V2,
        ..test_endpoint()
    };
    let client = client_for(&mock_server.uri());
    let result = client.interact(&endpoint, Uuid::new_v4(), &json!({})).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_interact_sends_v4_request_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ee/ind1/v1/interact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let request_id = Uuid::new_v4();
    client
        .interact(&test_endpoint(), request_id, &json!({}))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let (_, sent_id) = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "requestId")
        .unwrap();

    // 36-char hyphenated form with the v4 version nibble.
    assert_eq!(sent_id.len(), 36);
    let parsed = Uuid::parse_str(&sent_id).unwrap();
    assert_eq!(parsed, request_id);
    assert_eq!(parsed.get_version_num(), 4);
}

#[tokio::test]
async fn test_interact_surfaces_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ee/ind1/v1/interact"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client
        .interact(&test_endpoint(), Uuid::new_v4(), &json!({}))
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_interact_rejects_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ee/ind1/v1/interact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client
        .interact(&test_endpoint(), Uuid::new_v4(), &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_interact_accepts_any_json_shape() {
    let mock_server = MockServer::start().await;

    // Top-level array rather than the usual handle object.
    Mock::given(method("POST"))
        .and(path("/ee/ind1/v1/interact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let value = client
        .interact(&test_endpoint(), Uuid::new_v4(), &json!({}))
        .await
        .unwrap();

    assert_eq!(value, json!([1, 2, 3]));
}
