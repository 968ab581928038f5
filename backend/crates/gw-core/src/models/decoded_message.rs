use crate::DecodedValue;

use serde::Serialize;

/// One embedded message response, in the order the node reported it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMessage {
    pub type_url: String,
    pub decoded_value: DecodedValue,
}
