use crate::client::response_code;
use crate::{CancelGuard, GatewayMetrics, NodeError, NodeResult, RpcClient};

use gw_config::NodeConfig;
use gw_core::{
    BroadcastOptions, BroadcastResult, CoreError, DecodedMessage, DecodedValue, MessageRegistry,
    MsgResponse, bytes_from_json, decode_hex, protect_large_integers,
};
use gw_proto::{TxMsgData, TypeUrl};

use log::{error, info, warn};
use prost::Message;
use serde_json::Value;

/// Field names a node may use for the transaction hash, in lookup order
const TX_HASH_FIELDS: [&str; 3] = ["transactionHash", "txhash", "hash"];

/// Sections of a broadcast result that may carry an ABCI code, in lookup order
const RESULT_SECTIONS: [&str; 3] = ["check_tx", "tx_result", "deliver_tx"];

/// Sections whose base64 `data` holds the executed transaction's `TxMsgData`
const DATA_SECTIONS: [&str; 2] = ["tx_result", "deliver_tx"];

/// Submits pre-signed transactions and decodes what the node sends back
#[derive(Clone)]
pub struct Broadcaster {
    config: NodeConfig,
    metrics: GatewayMetrics,
}

impl Broadcaster {
    pub fn new(config: NodeConfig) -> Self {
        Self {
            config,
            metrics: GatewayMetrics::new(),
        }
    }

    /// Broadcast a hex-encoded signed transaction.
    ///
    /// A nonzero result code is returned as `RpcRejection`, never as a
    /// result. With `registry` set, every embedded message response is
    /// decoded independently; a message that cannot be decoded becomes a
    /// placeholder instead of failing the call.
    pub async fn broadcast(
        &self,
        hex_tx: &str,
        options: &BroadcastOptions,
        registry: Option<&MessageRegistry>,
        cancel: &mut CancelGuard,
    ) -> NodeResult<BroadcastResult> {
        let result = self.broadcast_inner(hex_tx, options, registry, cancel).await;

        match &result {
            Ok(accepted) => {
                self.metrics.broadcast_accepted();
                info!(
                    "Broadcast accepted (service={}, action={}, txhash={})",
                    options.service, options.action, accepted.tx_hash
                );
            }
            Err(NodeError::RpcRejection { code, .. }) => {
                self.metrics.broadcast_rejected(*code);
            }
            Err(e) => {
                self.metrics.broadcast_failed(e.error_code());
                error!(
                    "Broadcast failed (service={}, action={}): {}",
                    options.service, options.action, e
                );
            }
        }

        result
    }

    async fn broadcast_inner(
        &self,
        hex_tx: &str,
        options: &BroadcastOptions,
        registry: Option<&MessageRegistry>,
        cancel: &mut CancelGuard,
    ) -> NodeResult<BroadcastResult> {
        if hex_tx.trim().is_empty() {
            return Err(
                CoreError::validation("Signed transaction hex is empty", Some("signedTxHex"))
                    .into(),
            );
        }

        let tx = decode_hex(hex_tx)?;

        let client = RpcClient::from_config(&self.config)?;
        info!(
            "Broadcasting {} byte transaction to {} (mode={}, service={}, action={})",
            tx.len(),
            client.url(),
            self.config.broadcast_mode,
            options.service,
            options.action
        );
        self.metrics.broadcast_submitted();

        let raw = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(NodeError::cancelled()),
            raw = client.broadcast_tx(&tx, self.config.broadcast_mode) => raw?,
        };

        if !raw.as_object().is_some_and(|result| !result.is_empty()) {
            return Err(NodeError::response_decode(
                self.config.broadcast_mode.rpc_method(),
                format!("Expected a non-empty result object, got {}", raw),
            ));
        }

        if let Some((code, codespace, log)) = rejection(&raw) {
            warn!("Node rejected transaction with code {}: {}", code, log);
            return Err(NodeError::rejection(code, codespace, log));
        }

        let tx_hash = tx_hash(&raw);
        let decoded_messages = registry.map(|registry| decode_msg_responses(registry, &raw));

        Ok(BroadcastResult::accepted(
            tx_hash,
            decoded_messages,
            protect_large_integers(raw),
        ))
    }
}

/// First nonzero ABCI code in the result: root, then each section.
/// Returns `(code, codespace, raw log)`.
pub(crate) fn rejection(raw: &Value) -> Option<(u32, String, String)> {
    std::iter::once(raw)
        .chain(RESULT_SECTIONS.iter().filter_map(|section| raw.get(section)))
        .find_map(|section| {
            let code = response_code(section);
            (code != 0).then(|| {
                let codespace = section
                    .get("codespace")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let log = ["raw_log", "rawLog", "log"]
                    .iter()
                    .find_map(|key| section.get(key).and_then(Value::as_str))
                    .unwrap_or_default()
                    .to_string();
                (code, codespace, log)
            })
        })
}

/// Transaction hash under the first present field name, or empty
pub(crate) fn tx_hash(raw: &Value) -> String {
    TX_HASH_FIELDS
        .iter()
        .find_map(|field| raw.get(field).filter(|value| !value.is_null()))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

pub(crate) fn decode_msg_responses(
    registry: &MessageRegistry,
    raw: &Value,
) -> Vec<DecodedMessage> {
    if let Some(responses) = raw.get("msgResponses").or_else(|| raw.get("msg_responses")) {
        let Some(items) = responses.as_array() else {
            warn!("msgResponses is not a sequence, decoding no messages");
            return Vec::new();
        };

        return items
            .iter()
            .map(|item| match MsgResponse::from_json(item) {
                Ok(response) => decode_one(registry, response),
                Err(e) => {
                    let type_url = item
                        .get("typeUrl")
                        .or_else(|| item.get("type_url"))
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    DecodedMessage {
                        type_url: type_url.to_string(),
                        decoded_value: DecodedValue::failed(e.message(), &[]),
                    }
                }
            })
            .collect();
    }

    let data = DATA_SECTIONS.iter().find_map(|section| {
        raw.get(section)
            .and_then(|s| s.get("data"))
            .filter(|data| !data.is_null())
    });

    let Some(data) = data else {
        warn!("Node result carries no message responses, decoding no messages");
        return Vec::new();
    };

    let msg_data = bytes_from_json(data).and_then(|bytes| {
        TxMsgData::decode(bytes.as_slice())
            .map_err(|e| CoreError::proto_decode(TxMsgData::TYPE_URL, e))
    });

    match msg_data {
        Ok(msg_data) => msg_data
            .msg_responses
            .into_iter()
            .map(|any| decode_one(registry, MsgResponse::from(any)))
            .collect(),
        Err(e) => {
            warn!("Cannot read message responses from result data: {}", e);
            Vec::new()
        }
    }
}

fn decode_one(registry: &MessageRegistry, response: MsgResponse) -> DecodedMessage {
    let decoded_value = registry.decode(&response.type_url, &response.value);
    DecodedMessage {
        type_url: response.type_url,
        decoded_value,
    }
}
