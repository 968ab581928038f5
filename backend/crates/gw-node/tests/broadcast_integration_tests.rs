//! Broadcast pipeline against a wiremock node

use gw_config::{BroadcastMode, NodeConfig};
use gw_core::{BroadcastOptions, DecodedValue, MessageRegistry};
use gw_node::{Broadcaster, CancelCoordinator, CancelGuard, NodeError};
use gw_proto::TypeUrl;
use gw_proto::registry::v1::MsgCreatePresignedResponse;

use std::time::Duration;

use prost::Message;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn broadcaster(server: &MockServer, mode: BroadcastMode) -> Broadcaster {
    Broadcaster::new(NodeConfig {
        rpc_url: server.uri(),
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        broadcast_mode: mode,
    })
}

async fn mount_broadcast(server: &MockServer, rpc_method: &str, result: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1, "result": result
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn options() -> BroadcastOptions {
    BroadcastOptions::new("upload", "create-presigned")
}

fn index_map(bytes: &[u8]) -> Value {
    Value::Object(
        bytes
            .iter()
            .enumerate()
            .map(|(i, b)| (i.to_string(), json!(b)))
            .collect(),
    )
}

#[tokio::test]
async fn test_nonzero_code_is_error_with_code_and_log() {
    // Given
    let mock_server = MockServer::start().await;
    mount_broadcast(
        &mock_server,
        "broadcast_tx_sync",
        json!({ "code": 5, "codespace": "sdk", "log": "insufficient funds", "hash": "AA" }),
    )
    .await;

    // When
    let err = broadcaster(&mock_server, BroadcastMode::Sync)
        .broadcast("0xdeadbeef", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap_err();

    // Then
    assert!(matches!(err, NodeError::RpcRejection { code: 5, .. }));
    let message = err.message();
    assert!(message.contains('5'));
    assert!(message.contains("insufficient funds"));
}

#[tokio::test]
async fn test_accepted_without_registry_has_no_decoded_messages() {
    // Given
    let mock_server = MockServer::start().await;
    mount_broadcast(
        &mock_server,
        "broadcast_tx_commit",
        json!({
            "check_tx": { "code": 0 },
            "tx_result": { "code": 0, "gas_used": 18446744073709551615u64 },
            "hash": "C0FFEE",
            "height": "42"
        }),
    )
    .await;

    // When
    let result = broadcaster(&mock_server, BroadcastMode::Commit)
        .broadcast("deadbeef", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap();

    // Then
    assert!(result.success);
    assert_eq!(result.tx_hash, "C0FFEE");
    assert!(result.decoded_messages.is_none());
    assert_eq!(
        result.responses["tx_result"]["gas_used"],
        json!("18446744073709551615")
    );
    let body = serde_json::to_value(&result).unwrap();
    assert!(body.get("decodedMessages").is_none());
}

#[tokio::test]
async fn test_registry_decodes_known_and_marks_unknown_message() {
    // Given
    let mock_server = MockServer::start().await;
    let known = MsgCreatePresignedResponse {
        entry_id: 12,
        digest: "sha256:beef".to_string(),
        expires_at: 1_700_000_600,
    }
    .encode_to_vec();
    mount_broadcast(
        &mock_server,
        "broadcast_tx_commit",
        json!({
            "code": 0,
            "txhash": "BEEF",
            "msgResponses": [
                { "typeUrl": MsgCreatePresignedResponse::TYPE_URL, "value": index_map(&known) },
                { "typeUrl": "/other.v1.MsgUnknownResponse", "value": index_map(&[7, 8]) }
            ]
        }),
    )
    .await;
    let registry = MessageRegistry::standard();

    // When
    let result = broadcaster(&mock_server, BroadcastMode::Commit)
        .broadcast(
            "deadbeef",
            &options(),
            Some(&registry),
            &mut CancelGuard::detached(),
        )
        .await
        .unwrap();

    // Then
    assert_eq!(result.tx_hash, "BEEF");
    let decoded = result.decoded_messages.unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(
        decoded[0].decoded_value,
        DecodedValue::Decoded(json!({
            "entryId": "12",
            "digest": "sha256:beef",
            "expiresAt": "1700000600"
        }))
    );
    assert_eq!(
        decoded[1].decoded_value,
        DecodedValue::Failed {
            error: "Unknown message type: /other.v1.MsgUnknownResponse".to_string(),
            raw_bytes: vec![7, 8],
        }
    );
}

#[tokio::test]
async fn test_missing_hash_fields_yield_empty_hash() {
    let mock_server = MockServer::start().await;
    mount_broadcast(&mock_server, "broadcast_tx_sync", json!({ "code": 0 })).await;

    let result = broadcaster(&mock_server, BroadcastMode::Sync)
        .broadcast("00", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap();

    assert_eq!(result.tx_hash, "");
}

#[tokio::test]
async fn test_registry_with_no_responses_yields_empty_list() {
    let mock_server = MockServer::start().await;
    mount_broadcast(&mock_server, "broadcast_tx_sync", json!({ "code": 0, "hash": "AB" })).await;
    let registry = MessageRegistry::standard();

    let result = broadcaster(&mock_server, BroadcastMode::Sync)
        .broadcast("00", &options(), Some(&registry), &mut CancelGuard::detached())
        .await
        .unwrap();

    assert_eq!(result.decoded_messages, Some(vec![]));
}

#[tokio::test]
async fn test_null_result_is_response_decode_error() {
    // Given
    let mock_server = MockServer::start().await;
    mount_broadcast(&mock_server, "broadcast_tx_commit", Value::Null).await;

    // When
    let err = broadcaster(&mock_server, BroadcastMode::Commit)
        .broadcast("deadbeef", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap_err();

    // Then
    assert!(matches!(err, NodeError::ResponseDecode { .. }));
    assert_eq!(err.error_code(), "RESPONSE_DECODE");
}

#[tokio::test]
async fn test_non_object_or_empty_result_never_succeeds() {
    for result in [json!("ok"), json!(7), json!([]), json!({})] {
        let mock_server = MockServer::start().await;
        mount_broadcast(&mock_server, "broadcast_tx_sync", result.clone()).await;

        let outcome = broadcaster(&mock_server, BroadcastMode::Sync)
            .broadcast("00", &options(), None, &mut CancelGuard::detached())
            .await;

        assert!(
            matches!(outcome, Err(NodeError::ResponseDecode { .. })),
            "result {} was accepted",
            result
        );
    }
}

#[tokio::test]
async fn test_accepted_result_always_has_object_responses() {
    let mock_server = MockServer::start().await;
    mount_broadcast(&mock_server, "broadcast_tx_sync", json!({ "code": 0, "hash": "AB" })).await;

    let result = broadcaster(&mock_server, BroadcastMode::Sync)
        .broadcast("00", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.responses.as_object().is_some_and(|map| !map.is_empty()));
}

#[tokio::test]
async fn test_invalid_input_fails_before_any_request() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let broadcaster = broadcaster(&mock_server, BroadcastMode::Commit);

    // When
    let empty = broadcaster
        .broadcast("   ", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap_err();
    let odd = broadcaster
        .broadcast("0xabc", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap_err();
    let not_hex = broadcaster
        .broadcast("zz", &options(), None, &mut CancelGuard::detached())
        .await
        .unwrap_err();

    // Then
    assert_eq!(empty.error_code(), "VALIDATION_ERROR");
    assert_eq!(odd.error_code(), "VALIDATION_ERROR");
    assert_eq!(not_hex.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_cancellation_aborts_pending_broadcast() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "jsonrpc": "2.0", "id": 1, "result": { "code": 0 } }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;
    let coordinator = CancelCoordinator::new();
    let mut guard = coordinator.guard();
    let trigger = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    // When
    let err = broadcaster(&mock_server, BroadcastMode::Commit)
        .broadcast("00", &options(), None, &mut guard)
        .await
        .unwrap_err();

    // Then
    assert_eq!(err.error_code(), "CANCELLED");
}
