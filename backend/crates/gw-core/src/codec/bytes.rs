use crate::{CoreError, CoreResult};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Map, Value};

/// Rebuild a byte payload from the shapes nodes and their clients emit:
///
/// * an object keyed by decimal indices (`{"0": 10, "1": 3, ...}`), which is
///   how a JS `Uint8Array` survives a JSON round-trip
/// * an array of integers
/// * a base64 string (CometBFT's JSON encoding of `bytes`)
/// * `null`, treated as empty
pub fn bytes_from_json(value: &Value) -> CoreResult<Vec<u8>> {
    match value {
        Value::Object(map) => bytes_from_index_map(map),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| byte_value(&index.to_string(), item))
            .collect(),
        Value::String(encoded) => BASE64
            .decode(encoded)
            .map_err(|e| CoreError::byte_map(format!("Invalid base64 payload: {}", e))),
        Value::Null => Ok(Vec::new()),
        other => Err(CoreError::byte_map(format!(
            "Unsupported byte representation: {}",
            other
        ))),
    }
}

/// Integer-array form used for `rawBytes` in decode placeholders
pub fn bytes_to_json(bytes: &[u8]) -> Value {
    Value::Array(bytes.iter().map(|b| Value::from(*b)).collect())
}

/// Base64 form used for `bytes` fields in decoded messages
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

fn bytes_from_index_map(map: &Map<String, Value>) -> CoreResult<Vec<u8>> {
    // Map iteration order is lexical ("10" before "2"); order by the parsed index.
    let mut indexed = map
        .iter()
        .map(|(key, value)| Ok((canonical_index(key)?, byte_value(key, value)?)))
        .collect::<CoreResult<Vec<(usize, u8)>>>()?;

    indexed.sort_unstable_by_key(|(index, _)| *index);

    // Indices must be exactly 0..n
    for (position, (index, _)) in indexed.iter().enumerate() {
        if *index != position {
            return Err(CoreError::byte_map(if *index < position {
                format!("Duplicate byte index {}", index)
            } else {
                format!("Missing byte index {}", position)
            }));
        }
    }

    Ok(indexed.into_iter().map(|(_, byte)| byte).collect())
}

/// Plain decimal only: no sign, no leading zeros except "0" itself
fn canonical_index(key: &str) -> CoreResult<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));

    canonical
        .then(|| key.parse::<usize>().ok())
        .flatten()
        .ok_or_else(|| CoreError::byte_map(format!("Invalid byte index '{}'", key)))
}

fn byte_value(index: &str, value: &Value) -> CoreResult<u8> {
    value
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| {
            CoreError::byte_map(format!(
                "Byte at index {} is not an integer in 0..=255: {}",
                index, value
            ))
        })
}
