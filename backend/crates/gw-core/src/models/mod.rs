pub mod broadcast_options;
pub mod broadcast_result;
pub mod decoded_message;
pub mod msg_response;
pub mod page_request;
