use crate::codec::bytes::bytes_from_json;
use crate::{CoreError, CoreResult};

use gw_proto::Any;

use serde_json::Value;

/// A message response embedded in an executed transaction's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgResponse {
    pub type_url: String,
    pub value: Vec<u8>,
}

impl MsgResponse {
    /// Parse `{typeUrl|type_url, value}` where `value` is any byte
    /// representation accepted by [`bytes_from_json`]
    pub fn from_json(value: &Value) -> CoreResult<Self> {
        let type_url = value
            .get("typeUrl")
            .or_else(|| value.get("type_url"))
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::byte_map("Message response has no typeUrl"))?;

        let bytes = match value.get("value") {
            Some(raw) => bytes_from_json(raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            type_url: type_url.to_string(),
            value: bytes,
        })
    }
}

impl From<Any> for MsgResponse {
    fn from(any: Any) -> Self {
        Self {
            type_url: any.type_url,
            value: any.value,
        }
    }
}
