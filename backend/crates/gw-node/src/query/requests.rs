//! Strict JSON shapes accepted by each query method.
//!
//! Unknown fields are rejected so that a candidate meant for another method
//! fails locally and the dispatcher moves on without a node round-trip.

use gw_core::codec::json::u64_from_number_or_string;
use gw_core::{CoreResult, PageRequest};
use gw_proto::cosmos::bank::v1beta1::{QueryAllBalancesRequest, QueryBalanceRequest};
use gw_proto::registry::v1::{
    QueryAllRegistryRequest, QueryGetRegistryRequest, QueryParamsRequest,
    QueryRegistryByOwnerRequest,
};

use prost::Message;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A candidate request shape that converts into its protobuf request
pub trait QueryRequest: DeserializeOwned {
    type Proto: Message;

    fn into_proto(self) -> CoreResult<Self::Proto>;
}

fn page(pagination: Option<PageRequest>) -> CoreResult<Option<gw_proto::PageRequest>> {
    pagination.map(PageRequest::into_proto).transpose()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParamsRequest {}

impl QueryRequest for ParamsRequest {
    type Proto = QueryParamsRequest;

    fn into_proto(self) -> CoreResult<Self::Proto> {
        Ok(QueryParamsRequest {})
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistryRequest {
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub id: u64,
}

impl QueryRequest for RegistryRequest {
    type Proto = QueryGetRegistryRequest;

    fn into_proto(self) -> CoreResult<Self::Proto> {
        Ok(QueryGetRegistryRequest { id: self.id })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistryAllRequest {
    #[serde(default)]
    pub pagination: Option<PageRequest>,
}

impl QueryRequest for RegistryAllRequest {
    type Proto = QueryAllRegistryRequest;

    fn into_proto(self) -> CoreResult<Self::Proto> {
        Ok(QueryAllRegistryRequest {
            pagination: page(self.pagination)?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistryByOwnerRequest {
    pub owner: String,
    #[serde(default)]
    pub pagination: Option<PageRequest>,
}

impl QueryRequest for RegistryByOwnerRequest {
    type Proto = QueryRegistryByOwnerRequest;

    fn into_proto(self) -> CoreResult<Self::Proto> {
        Ok(QueryRegistryByOwnerRequest {
            owner: self.owner,
            pagination: page(self.pagination)?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BalanceRequest {
    pub address: String,
    pub denom: String,
}

impl QueryRequest for BalanceRequest {
    type Proto = QueryBalanceRequest;

    fn into_proto(self) -> CoreResult<Self::Proto> {
        Ok(QueryBalanceRequest {
            address: self.address,
            denom: self.denom,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllBalancesRequest {
    pub address: String,
    #[serde(default)]
    pub pagination: Option<PageRequest>,
}

impl QueryRequest for AllBalancesRequest {
    type Proto = QueryAllBalancesRequest;

    fn into_proto(self) -> CoreResult<Self::Proto> {
        Ok(QueryAllBalancesRequest {
            address: self.address,
            pagination: page(self.pagination)?,
        })
    }
}
