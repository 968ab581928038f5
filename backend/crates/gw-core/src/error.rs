use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Hex decode error: {message} {location}")]
    HexDecode {
        message: String,
        #[source]
        source: hex::FromHexError,
        location: ErrorLocation,
    },

    #[error("Byte reconstruction error: {message} {location}")]
    ByteMap {
        message: String,
        location: ErrorLocation,
    },

    #[error("Protobuf decode failed for {type_url}: {source} {location}")]
    ProtoDecode {
        type_url: String,
        #[source]
        source: prost::DecodeError,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named input field
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a byte reconstruction error
    #[track_caller]
    pub fn byte_map<S: Into<String>>(message: S) -> Self {
        CoreError::ByteMap {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a prost decode failure for the given message type
    #[track_caller]
    pub fn proto_decode(type_url: &str, source: prost::DecodeError) -> Self {
        CoreError::ProtoDecode {
            type_url: type_url.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable message without the source location suffix.
    /// This is what crosses the process boundary.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::HexDecode { message, .. } => message.clone(),
            Self::ByteMap { message, .. } => message.clone(),
            Self::ProtoDecode {
                type_url, source, ..
            } => format!("Failed to decode {}: {}", type_url, source),
            Self::Json { source, .. } => source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
