use crate::CoreResult;
use crate::codec::bytes::bytes_from_json;
use crate::codec::json::opt_u64_from_number_or_string;

use serde::Deserialize;
use serde_json::Value;

/// Pagination parameters forwarded verbatim to list-style queries.
///
/// `key` accepts any byte representation (base64, integer array or
/// index-keyed object); integers accept numbers or decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageRequest {
    #[serde(default)]
    pub key: Option<Value>,
    #[serde(default, deserialize_with = "opt_u64_from_number_or_string")]
    pub offset: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_number_or_string")]
    pub limit: Option<u64>,
    #[serde(default, alias = "count_total")]
    pub count_total: Option<bool>,
    #[serde(default)]
    pub reverse: Option<bool>,
}

impl PageRequest {
    pub fn into_proto(self) -> CoreResult<gw_proto::PageRequest> {
        let key = match self.key {
            Some(ref raw) => bytes_from_json(raw)?,
            None => Vec::new(),
        };

        Ok(gw_proto::PageRequest {
            key,
            offset: self.offset.unwrap_or_default(),
            limit: self.limit.unwrap_or_default(),
            count_total: self.count_total.unwrap_or_default(),
            reverse: self.reverse.unwrap_or_default(),
        })
    }
}
