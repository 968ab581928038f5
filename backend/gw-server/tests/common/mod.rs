#![allow(dead_code)]

//! Test infrastructure for gw-server API tests

use gw_config::NodeConfig;
use gw_node::CancelCoordinator;
use gw_server::{AppState, build_router};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

pub fn node_config(rpc_url: &str) -> NodeConfig {
    NodeConfig {
        rpc_url: rpc_url.to_string(),
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        ..NodeConfig::default()
    }
}

pub fn create_test_app_state(rpc_url: &str) -> AppState {
    AppState::new(
        node_config(rpc_url),
        TEST_BODY_LIMIT,
        CancelCoordinator::new(),
    )
}

pub fn create_test_app(rpc_url: &str) -> Router {
    build_router(create_test_app_state(rpc_url))
}

/// Send one request through the router, returning status and JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Answer one JSON-RPC method with `result`
pub async fn mount_rpc(server: &MockServer, rpc_method: &str, result: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1, "result": result
        })))
        .mount(server)
        .await;
}

/// Answer abci_query calls whose hex `data` matches
pub async fn mount_abci(server: &MockServer, data_hex: &str, response: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "abci_query",
            "params": { "data": data_hex }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1, "result": { "response": response }
        })))
        .mount(server)
        .await;
}
