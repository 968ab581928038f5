use serde::Serialize;
use serde_json::Value;

/// Outcome of decoding one embedded message.
///
/// Serializes as the decoded JSON itself, or as
/// `{"error": "...", "rawBytes": [..]}` when decoding was not possible.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    Decoded(Value),
    Failed {
        error: String,
        #[serde(rename = "rawBytes")]
        raw_bytes: Vec<u8>,
    },
}

impl DecodedValue {
    pub fn unknown_type(type_url: &str, bytes: &[u8]) -> Self {
        Self::Failed {
            error: format!("Unknown message type: {}", type_url),
            raw_bytes: bytes.to_vec(),
        }
    }

    pub fn failed<S: Into<String>>(error: S, bytes: &[u8]) -> Self {
        Self::Failed {
            error: error.into(),
            raw_bytes: bytes.to_vec(),
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Decoded(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}
