mod common;

use common::{create_test_app, get, mount_abci, mount_rpc, post_json, send};

use gw_proto::PageResponse;
use gw_proto::registry::v1::{Entry, QueryAllRegistryResponse, QueryGetRegistryResponse};

use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::{Request, StatusCode};
use prost::Message;
use serde_json::{Value, json};
use wiremock::MockServer;

fn entry(id: u64) -> Entry {
    Entry {
        id,
        owner: "cosmos1owner".to_string(),
        name: "report.pdf".to_string(),
        uri: "ipfs://bafy".to_string(),
        digest: "sha256:aa".to_string(),
        created_at: 1_700_000_000,
    }
}

fn registry_all_value() -> String {
    BASE64.encode(
        QueryAllRegistryResponse {
            entries: vec![entry(9_007_199_254_740_993)],
            pagination: Some(PageResponse {
                next_key: vec![],
                total: 1,
            }),
        }
        .encode_to_vec(),
    )
}

async fn node_with_status() -> MockServer {
    let mock_server = MockServer::start().await;
    mount_rpc(&mock_server, "status", json!({ "node_info": {} })).await;
    mock_server
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = create_test_app("http://127.0.0.1:1");

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_get_registry_falls_back_to_next_shape() {
    // Given - the node refuses countTotal, accepts the bare pagination shape
    let mock_server = node_with_status().await;
    mount_abci(
        &mock_server,
        "0a0418642001",
        json!({ "code": 1, "log": "count_total not supported" }),
    )
    .await;
    mount_abci(
        &mock_server,
        "0a00",
        json!({ "code": 0, "value": registry_all_value() }),
    )
    .await;
    let app = create_test_app(&mock_server.uri());

    // When
    let (status, body) = send(app, get("/get/create-presigned/GetRegistry")).await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["entries"][0]["id"], json!("9007199254740993"));
    assert_eq!(body["data"]["entries"][0]["name"], "report.pdf");
    assert_eq!(body["data"]["pagination"]["total"], json!("1"));
}

#[tokio::test]
async fn test_get_registry_with_unreachable_node_returns_500() {
    let app = create_test_app("http://127.0.0.1:1");

    let (status, body) = send(app, get("/get/create-presigned/GetRegistry")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("127.0.0.1:1"));
}

#[tokio::test]
async fn test_query_route_single_request() {
    // Given - {"id":"7"} encodes as field 1 varint 7
    let mock_server = node_with_status().await;
    let value = BASE64.encode(
        QueryGetRegistryResponse {
            entry: Some(entry(7)),
        }
        .encode_to_vec(),
    );
    mount_abci(&mock_server, "0807", json!({ "code": 0, "value": value })).await;
    let app = create_test_app(&mock_server.uri());

    // When
    let (status, body) = send(
        app,
        post_json(
            "/api/query/registry.v1.Query/Registry",
            json!({ "request": { "id": "7" } }),
        ),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["entry"]["id"], json!("7"));
    assert_eq!(body["data"]["entry"]["owner"], "cosmos1owner");
}

#[tokio::test]
async fn test_query_route_without_body_sends_empty_request() {
    let mock_server = node_with_status().await;
    mount_abci(
        &mock_server,
        "",
        json!({ "code": 0, "value": registry_all_value() }),
    )
    .await;
    let app = create_test_app(&mock_server.uri());
    let request = Request::builder()
        .method("POST")
        .uri("/api/query/registry.v1.Query/RegistryAll")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["entries"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_query_route_unknown_method_lists_available_methods() {
    let mock_server = node_with_status().await;
    let app = create_test_app(&mock_server.uri());

    let (status, body) = send(
        app,
        post_json("/api/query/registry.v1.Query/Nope", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Nope"));
    assert!(message.contains("RegistryAll"));
}

#[tokio::test]
async fn test_query_route_unknown_service_returns_500() {
    let mock_server = node_with_status().await;
    let app = create_test_app(&mock_server.uri());

    let (status, body) = send(
        app,
        post_json("/api/query/foo.v1.Query/Bar", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("foo.v1.Query"));
}

#[tokio::test]
async fn test_query_route_malformed_body_returns_400() {
    let app = create_test_app("http://127.0.0.1:1");

    let (status, body) = send(
        app,
        post_json(
            "/api/query/registry.v1.Query/RegistryAll",
            json!({ "candidates": [] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_services_lists_catalog_and_message_types() {
    let app = create_test_app("http://127.0.0.1:1");

    let (status, body) = send(app, get("/api/services")).await;

    assert_eq!(status, StatusCode::OK);
    let methods: Vec<Value> = body["data"]["services"]["registry.v1.Query"]
        .as_array()
        .cloned()
        .unwrap();
    assert!(methods.contains(&json!("RegistryAll")));
    assert!(body["data"]["services"]["cosmos.bank.v1beta1.Query"].is_array());
    assert!(
        body["data"]["messageTypes"]
            .as_array()
            .unwrap()
            .contains(&json!("/registry.v1.MsgCreatePresignedResponse"))
    );
}

#[tokio::test]
async fn test_metrics_without_recorder_returns_404() {
    let app = create_test_app("http://127.0.0.1:1");

    let (status, body) = send(app, get("/metrics")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}
