use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How long the node holds the broadcast call open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Return after `CheckTx`; no message responses are available yet
    Sync,
    /// Return after the transaction executed in a block
    #[default]
    Commit,
}

impl BroadcastMode {
    /// CometBFT JSON-RPC method name
    pub fn rpc_method(&self) -> &'static str {
        match self {
            BroadcastMode::Sync => "broadcast_tx_sync",
            BroadcastMode::Commit => "broadcast_tx_commit",
        }
    }
}

impl FromStr for BroadcastMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sync" => Ok(BroadcastMode::Sync),
            "commit" => Ok(BroadcastMode::Commit),
            other => Err(format!("unknown broadcast mode '{}'", other)),
        }
    }
}

impl fmt::Display for BroadcastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroadcastMode::Sync => write!(f, "sync"),
            BroadcastMode::Commit => write!(f, "commit"),
        }
    }
}
