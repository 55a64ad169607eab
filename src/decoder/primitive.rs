use bytes::Bytes;

use super::base::Decoder;
use super::error::FieldError;
use crate::bencode::Value;

fn leaf<T>(expected: &'static str, extract: fn(&Value) -> Option<T>) -> Decoder<T>
where
    T: Default + 'static,
{
    Decoder::new(move |input| match extract(input) {
        Some(value) => (value, Vec::new()),
        None => (T::default(), vec![FieldError::new(expected, input.kind())]),
    })
}

/// Decodes an integer.
pub fn int() -> Decoder<i64> {
    leaf("Integer", Value::as_integer)
}

/// Decodes a UTF-8 byte string.
pub fn string() -> Decoder<String> {
    leaf("String", |value| value.as_str().map(str::to_owned))
}

/// Decodes the raw payload of a byte string.
///
/// Accepts both [`Value::Str`] and [`Value::Bytes`]: binary data such as a
/// hash blob can happen to be valid UTF-8 and decode as text.
pub fn bytes() -> Decoder<Bytes> {
    leaf("Bytes", |value| match value {
        Value::Bytes(b) => Some(b.clone()),
        Value::Str(s) => Some(Bytes::copy_from_slice(s.as_bytes())),
        _ => None,
    })
}
