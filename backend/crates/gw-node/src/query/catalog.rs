use crate::query::requests::{
    AllBalancesRequest, BalanceRequest, ParamsRequest, QueryRequest, RegistryAllRequest,
    RegistryByOwnerRequest, RegistryRequest,
};
use crate::{NodeError, NodeResult};

use gw_core::{ToJson, decode_message};
use gw_proto::TypeUrl;
use gw_proto::cosmos::bank::v1beta1::{QueryAllBalancesResponse, QueryBalanceResponse};
use gw_proto::registry::v1::{
    QueryAllRegistryResponse, QueryGetRegistryResponse, QueryParamsResponse,
};

use std::collections::BTreeMap;

use prost::Message;
use serde_json::Value;

pub const REGISTRY_SERVICE: &str = "registry.v1.Query";
pub const BANK_SERVICE: &str = "cosmos.bank.v1beta1.Query";

/// Candidate JSON -> protobuf request bytes
pub type EncodeRequestFn = fn(&Value) -> NodeResult<Vec<u8>>;
/// Protobuf response bytes -> JSON
pub type DecodeResponseFn = fn(&[u8]) -> NodeResult<Value>;

/// One callable query method
#[derive(Clone, Copy)]
pub struct QueryMethod {
    /// ABCI query path, e.g. `/registry.v1.Query/Params`
    pub path: &'static str,
    pub encode: EncodeRequestFn,
    pub decode: DecodeResponseFn,
}

impl QueryMethod {
    pub fn new<R, M>(path: &'static str) -> Self
    where
        R: QueryRequest,
        M: Message + Default + TypeUrl + ToJson,
    {
        Self {
            path,
            encode: encode_request::<R>,
            decode: decode_response::<M>,
        }
    }
}

fn encode_request<R: QueryRequest>(candidate: &Value) -> NodeResult<Vec<u8>> {
    let request: R = serde_json::from_value(candidate.clone()).map_err(|e| {
        let shape = std::any::type_name::<R>().rsplit("::").next().unwrap_or_default();
        NodeError::request_encode(shape, e.to_string())
    })?;
    Ok(request.into_proto()?.encode_to_vec())
}

fn decode_response<M>(bytes: &[u8]) -> NodeResult<Value>
where
    M: Message + Default + TypeUrl + ToJson,
{
    Ok(decode_message::<M>(bytes)?.to_json())
}

/// Capability table of one query service: method name -> method
#[derive(Clone)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub methods: BTreeMap<&'static str, QueryMethod>,
}

impl ServiceDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            methods: BTreeMap::new(),
        }
    }

    /// Add a method served at the ABCI query `path`
    pub fn with_method<R, M>(mut self, method: &'static str, path: &'static str) -> Self
    where
        R: QueryRequest,
        M: Message + Default + TypeUrl + ToJson,
    {
        self.methods.insert(method, QueryMethod::new::<R, M>(path));
        self
    }

    pub fn method(&self, name: &str) -> Option<&QueryMethod> {
        self.methods.get(name)
    }

    /// Method names, sorted
    pub fn method_names(&self) -> Vec<&'static str> {
        self.methods.keys().copied().collect()
    }
}

/// All query services the gateway can open
#[derive(Clone, Default)]
pub struct ServiceCatalog {
    services: BTreeMap<&'static str, ServiceDescriptor>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::new()
            .with_service(
                ServiceDescriptor::new(REGISTRY_SERVICE)
                    .with_method::<ParamsRequest, QueryParamsResponse>(
                        "Params",
                        "/registry.v1.Query/Params",
                    )
                    .with_method::<RegistryRequest, QueryGetRegistryResponse>(
                        "Registry",
                        "/registry.v1.Query/Registry",
                    )
                    .with_method::<RegistryAllRequest, QueryAllRegistryResponse>(
                        "RegistryAll",
                        "/registry.v1.Query/RegistryAll",
                    )
                    .with_method::<RegistryByOwnerRequest, QueryAllRegistryResponse>(
                        "RegistryByOwner",
                        "/registry.v1.Query/RegistryByOwner",
                    ),
            )
            .with_service(
                ServiceDescriptor::new(BANK_SERVICE)
                    .with_method::<BalanceRequest, QueryBalanceResponse>(
                        "Balance",
                        "/cosmos.bank.v1beta1.Query/Balance",
                    )
                    .with_method::<AllBalancesRequest, QueryAllBalancesResponse>(
                        "AllBalances",
                        "/cosmos.bank.v1beta1.Query/AllBalances",
                    ),
            )
    }

    pub fn with_service(mut self, descriptor: ServiceDescriptor) -> Self {
        self.services.insert(descriptor.name, descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(name)
    }

    /// Service names, sorted
    pub fn service_names(&self) -> Vec<&'static str> {
        self.services.keys().copied().collect()
    }

    pub fn services(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.values()
    }
}
