pub mod decoded_value;
pub mod message_registry;
pub mod to_json;
