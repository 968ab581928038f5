mod rpc_client;

pub(crate) use rpc_client::response_code;
pub use rpc_client::RpcClient;
