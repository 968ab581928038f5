use crate::{GatewayMetrics, NodeError, NodeResult};

use gw_config::{BroadcastMode, NodeConfig};
use gw_core::{bytes_from_json, encode_hex};

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::{Value, json};

/// CometBFT JSON-RPC client.
///
/// Each instance owns its own HTTP client. A one-shot client (`new`) keeps no
/// idle connections; a held client (`held`) keeps one open connection to the
/// node until the client is dropped.
pub struct RpcClient {
    url: String,
    client: ReqwestClient,
    held: bool,
    next_id: AtomicU64,
    metrics: GatewayMetrics,
}

impl RpcClient {
    pub fn new(
        url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> NodeResult<Self> {
        Self::build(url, connect_timeout, request_timeout, false)
    }

    /// Client that reuses a single keep-alive connection for every call
    pub fn held(
        url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> NodeResult<Self> {
        Self::build(url, connect_timeout, request_timeout, true)
    }

    fn build(
        url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
        held: bool,
    ) -> NodeResult<Self> {
        let url = url.trim().trim_end_matches('/').to_string();
        let client = ReqwestClient::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .pool_max_idle_per_host(usize::from(held))
            .build()
            .map_err(|e| NodeError::from_reqwest(&url, e))?;

        Ok(Self {
            url,
            client,
            held,
            next_id: AtomicU64::new(1),
            metrics: GatewayMetrics::new(),
        })
    }

    pub fn from_config(config: &NodeConfig) -> NodeResult<Self> {
        Self::new(
            &config.rpc_url,
            config.connect_timeout(),
            config.request_timeout(),
        )
    }

    pub fn held_from_config(config: &NodeConfig) -> NodeResult<Self> {
        Self::held(
            &config.rpc_url,
            config.connect_timeout(),
            config.request_timeout(),
        )
    }

    /// Whether the connection outlives a single call
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Node status; used as a liveness probe when opening a connection
    pub async fn status(&self) -> NodeResult<Value> {
        self.call("status", json!({})).await
    }

    /// Run an ABCI query and return the raw response bytes.
    ///
    /// A nonzero ABCI code is a rejection, not an empty answer.
    pub async fn abci_query(&self, path: &str, data: &[u8]) -> NodeResult<Vec<u8>> {
        let result = self
            .call(
                "abci_query",
                json!({
                    "path": path,
                    "data": encode_hex(data),
                    "height": "0",
                    "prove": false,
                }),
            )
            .await?;

        let response = result
            .get("response")
            .ok_or_else(|| NodeError::response_decode(path, "abci_query result has no response"))?;

        let code = response_code(response);
        if code != 0 {
            let codespace = response
                .get("codespace")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let log = response
                .get("log")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(NodeError::rejection(code, codespace, log));
        }

        match response.get("value") {
            Some(value) => Ok(bytes_from_json(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Submit a signed transaction and return the node's raw `result` object
    pub async fn broadcast_tx(&self, tx: &[u8], mode: BroadcastMode) -> NodeResult<Value> {
        self.call(mode.rpc_method(), json!({ "tx": BASE64.encode(tx) }))
            .await
    }

    async fn call(&self, method: &str, params: Value) -> NodeResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("-> {} {} (id={})", self.url, method, id);
        let started = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NodeError::from_reqwest(&self.url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| NodeError::from_reqwest(&self.url, e))?;

        self.metrics.node_latency(started.elapsed());
        debug!(
            "<- {} {} {} in {}ms",
            self.url,
            method,
            status,
            started.elapsed().as_millis()
        );

        let envelope: Value = serde_json::from_str(&text).map_err(|e| {
            NodeError::http(
                format!("{} returned a non JSON-RPC body ({}): {}", method, status, e),
                Some(status.as_u16()),
            )
        })?;

        if let Some(error) = envelope.get("error")
            && !error.is_null()
        {
            return Err(rpc_error(error));
        }

        if !status.is_success() {
            return Err(NodeError::http(
                format!("{} failed with HTTP {}", method, status),
                Some(status.as_u16()),
            ));
        }

        envelope
            .get("result")
            .cloned()
            .ok_or_else(|| NodeError::response_decode(method, "JSON-RPC response has no result"))
    }
}

fn rpc_error(error: &Value) -> NodeError {
    let code = error.get("code").and_then(Value::as_i64).unwrap_or(-1);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error");
    let data = error.get("data").and_then(|data| match data {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    });

    NodeError::rpc(code, message, data)
}

/// ABCI codes arrive as numbers, or as strings from some proxies
pub(crate) fn response_code(value: &Value) -> u32 {
    match value.get("code") {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(u32::MAX),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(u32::MAX),
        _ => 0,
    }
}
