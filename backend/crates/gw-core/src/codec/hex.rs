use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Lowercase hex encoding without a prefix
pub fn encode_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Strip an optional `0x` / `0X` prefix
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Decode a hex string, with or without a `0x` prefix.
///
/// Surrounding whitespace is ignored. Empty input is a validation error;
/// odd length and non-hex characters are decode errors. Input is never
/// silently truncated.
#[track_caller]
pub fn decode_hex(input: &str) -> CoreResult<Vec<u8>> {
    let digits = strip_hex_prefix(input.trim());

    if digits.is_empty() {
        return Err(CoreError::Validation {
            message: "Hex string is empty".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    ::hex::decode(digits).map_err(|source| CoreError::HexDecode {
        message: describe_hex_error(&source, digits.len()),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

fn describe_hex_error(error: &::hex::FromHexError, len: usize) -> String {
    match error {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            format!("Invalid hex character '{}' at position {}", c, index)
        }
        ::hex::FromHexError::OddLength => {
            format!("Hex string has odd length ({} digits)", len)
        }
        ::hex::FromHexError::InvalidStringLength => {
            format!("Hex string has invalid length ({} digits)", len)
        }
    }
}
