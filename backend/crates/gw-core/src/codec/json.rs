use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Largest integer a JavaScript `number` represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Rewrite every integer whose magnitude exceeds [`MAX_SAFE_INTEGER`] into
/// its decimal string form, recursively.
pub fn protect_large_integers(value: Value) -> Value {
    match value {
        Value::Number(number) => {
            let oversized = number
                .as_u64()
                .map(|n| n > MAX_SAFE_INTEGER)
                .or_else(|| number.as_i64().map(|n| n.unsigned_abs() > MAX_SAFE_INTEGER))
                .unwrap_or(false);

            if oversized {
                Value::String(number.to_string())
            } else {
                Value::Number(number)
            }
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(protect_large_integers).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, protect_large_integers(value)))
                .collect(),
        ),
        other => other,
    }
}

/// 64-bit protobuf integers are emitted as decimal strings (proto3 JSON mapping)
pub fn u64_value(n: u64) -> Value {
    Value::String(n.to_string())
}

pub fn i64_value(n: i64) -> Value {
    Value::String(n.to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// Deserialize an optional `u64` given either as a JSON number or a decimal string
pub fn opt_u64_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer '{}': {}", s, e))),
    }
}

/// Deserialize a required `u64` given either as a JSON number or a decimal string
pub fn u64_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_u64_from_number_or_string(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("expected an integer, found null"))
}
