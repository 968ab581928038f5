//! JSON views of the protobuf types, following the proto3 JSON mapping:
//! camelCase keys, 64-bit integers as decimal strings, bytes as base64.

use crate::codec::bytes::bytes_to_base64;
use crate::codec::json::{i64_value, u64_value};

use gw_proto::cosmos::bank::v1beta1::{
    MsgSendResponse, QueryAllBalancesResponse, QueryBalanceResponse,
};
use gw_proto::cosmos::base::v1beta1::Coin;
use gw_proto::registry::v1::{
    Entry, MsgCreatePresignedResponse, MsgUpdateEntryResponse, Params, QueryAllRegistryResponse,
    QueryGetRegistryResponse, QueryParamsResponse,
};
use gw_proto::{Any, PageResponse};

use serde_json::{Value, json};

pub trait ToJson {
    fn to_json(&self) -> Value;
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToJson::to_json)
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl ToJson for Any {
    fn to_json(&self) -> Value {
        json!({
            "typeUrl": self.type_url,
            "value": bytes_to_base64(&self.value),
        })
    }
}

impl ToJson for PageResponse {
    fn to_json(&self) -> Value {
        let next_key = if self.next_key.is_empty() {
            Value::Null
        } else {
            Value::String(bytes_to_base64(&self.next_key))
        };

        json!({
            "nextKey": next_key,
            "total": u64_value(self.total),
        })
    }
}

impl ToJson for Coin {
    fn to_json(&self) -> Value {
        json!({
            "denom": self.denom,
            "amount": self.amount,
        })
    }
}

impl ToJson for MsgSendResponse {
    fn to_json(&self) -> Value {
        json!({})
    }
}

impl ToJson for QueryBalanceResponse {
    fn to_json(&self) -> Value {
        json!({ "balance": self.balance.to_json() })
    }
}

impl ToJson for QueryAllBalancesResponse {
    fn to_json(&self) -> Value {
        json!({
            "balances": self.balances.to_json(),
            "pagination": self.pagination.to_json(),
        })
    }
}

impl ToJson for Entry {
    fn to_json(&self) -> Value {
        json!({
            "id": u64_value(self.id),
            "owner": self.owner,
            "name": self.name,
            "uri": self.uri,
            "digest": self.digest,
            "createdAt": i64_value(self.created_at),
        })
    }
}

impl ToJson for Params {
    fn to_json(&self) -> Value {
        json!({
            "maxEntriesPerOwner": u64_value(self.max_entries_per_owner),
            "presignTtlSecs": u64_value(self.presign_ttl_secs),
        })
    }
}

impl ToJson for MsgCreatePresignedResponse {
    fn to_json(&self) -> Value {
        json!({
            "entryId": u64_value(self.entry_id),
            "digest": self.digest,
            "expiresAt": i64_value(self.expires_at),
        })
    }
}

impl ToJson for MsgUpdateEntryResponse {
    fn to_json(&self) -> Value {
        json!({})
    }
}

impl ToJson for QueryParamsResponse {
    fn to_json(&self) -> Value {
        json!({ "params": self.params.to_json() })
    }
}

impl ToJson for QueryGetRegistryResponse {
    fn to_json(&self) -> Value {
        json!({ "entry": self.entry.to_json() })
    }
}

impl ToJson for QueryAllRegistryResponse {
    fn to_json(&self) -> Value {
        json!({
            "entries": self.entries.to_json(),
            "pagination": self.pagination.to_json(),
        })
    }
}
