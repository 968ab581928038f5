use crate::DecodedMessage;

use serde::Serialize;
use serde_json::Value;

/// Outcome of an accepted broadcast.
///
/// Only ever constructed for accepted transactions; a rejection is an error,
/// never a result with `success: false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResult {
    pub success: bool,
    /// Empty when the node reported no hash under any known field name
    pub tx_hash: String,
    /// `None` when no registry was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded_messages: Option<Vec<DecodedMessage>>,
    /// Raw node response, large integers already stringified
    pub responses: Value,
}

impl BroadcastResult {
    pub fn accepted(
        tx_hash: String,
        decoded_messages: Option<Vec<DecodedMessage>>,
        responses: Value,
    ) -> Self {
        Self {
            success: true,
            tx_hash,
            decoded_messages,
            responses,
        }
    }
}
