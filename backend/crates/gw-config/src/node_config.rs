use crate::{
    BroadcastMode, ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RPC_URL, MAX_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Remote CometBFT node used for both broadcasts and queries
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub rpc_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub broadcast_mode: BroadcastMode,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::from(DEFAULT_RPC_URL),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            broadcast_mode: BroadcastMode::default(),
        }
    }
}

impl NodeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.rpc_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::node(format!(
                "node.rpc_url must start with http:// or https://, got '{}'",
                self.rpc_url
            )));
        }

        for (name, value) in [
            ("node.connect_timeout_secs", self.connect_timeout_secs),
            ("node.request_timeout_secs", self.request_timeout_secs),
        ] {
            if value == 0 || value > MAX_TIMEOUT_SECS {
                return Err(ConfigError::node(format!(
                    "{} must be 1-{}, got {}",
                    name, MAX_TIMEOUT_SECS, value
                )));
            }
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
