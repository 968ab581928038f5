pub mod codec;
pub mod error;
pub mod models;
pub mod registry;

#[cfg(test)]
mod tests;

pub use codec::bytes::{bytes_from_json, bytes_to_base64, bytes_to_json};
pub use codec::hex::{decode_hex, encode_hex, strip_hex_prefix};
pub use codec::json::{MAX_SAFE_INTEGER, protect_large_integers};
pub use error::{CoreError, Result as CoreResult};
pub use models::broadcast_options::BroadcastOptions;
pub use models::broadcast_result::BroadcastResult;
pub use models::decoded_message::DecodedMessage;
pub use models::msg_response::MsgResponse;
pub use models::page_request::PageRequest;
pub use registry::decoded_value::DecodedValue;
pub use registry::message_registry::{
    DecodeFn, MessageRegistry, MessageRegistryBuilder, decode_message,
};
pub use registry::to_json::ToJson;
