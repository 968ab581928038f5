use crate::cosmos::bank::v1beta1::{
    MsgSendResponse, QueryAllBalancesRequest, QueryAllBalancesResponse, QueryBalanceRequest,
    QueryBalanceResponse,
};
use crate::cosmos::base::abci::v1beta1::TxMsgData;
use crate::google::protobuf::Any;
use crate::registry::v1::{
    MsgCreatePresignedResponse, MsgUpdateEntryResponse, QueryAllRegistryRequest,
    QueryAllRegistryResponse, QueryGetRegistryRequest, QueryGetRegistryResponse,
    QueryParamsRequest, QueryParamsResponse, QueryRegistryByOwnerRequest,
};

/// Self-describing identifier carried in `Any.type_url` and in
/// `msg_responses` of an executed transaction.
pub trait TypeUrl {
    const TYPE_URL: &'static str;
}

macro_rules! type_url {
    ($($ty:ty => $url:literal),+ $(,)?) => {
        $(
            impl TypeUrl for $ty {
                const TYPE_URL: &'static str = $url;
            }
        )+
    };
}

type_url! {
    Any => "/google.protobuf.Any",
    TxMsgData => "/cosmos.base.abci.v1beta1.TxMsgData",
    MsgSendResponse => "/cosmos.bank.v1beta1.MsgSendResponse",
    QueryBalanceRequest => "/cosmos.bank.v1beta1.QueryBalanceRequest",
    QueryBalanceResponse => "/cosmos.bank.v1beta1.QueryBalanceResponse",
    QueryAllBalancesRequest => "/cosmos.bank.v1beta1.QueryAllBalancesRequest",
    QueryAllBalancesResponse => "/cosmos.bank.v1beta1.QueryAllBalancesResponse",
    MsgCreatePresignedResponse => "/registry.v1.MsgCreatePresignedResponse",
    MsgUpdateEntryResponse => "/registry.v1.MsgUpdateEntryResponse",
    QueryParamsRequest => "/registry.v1.QueryParamsRequest",
    QueryParamsResponse => "/registry.v1.QueryParamsResponse",
    QueryGetRegistryRequest => "/registry.v1.QueryGetRegistryRequest",
    QueryGetRegistryResponse => "/registry.v1.QueryGetRegistryResponse",
    QueryAllRegistryRequest => "/registry.v1.QueryAllRegistryRequest",
    QueryAllRegistryResponse => "/registry.v1.QueryAllRegistryResponse",
    QueryRegistryByOwnerRequest => "/registry.v1.QueryRegistryByOwnerRequest",
}
