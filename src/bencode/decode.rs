use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes a single bencode value that spans the whole buffer.
///
/// # Errors
///
/// Fails on the first malformed byte; no partial tree is returned. Any byte
/// left over after a complete value is reported as
/// [`BencodeError::Unexpected`] carrying that byte.
///
/// # Examples
///
/// ```
/// use piecemeal::bencode::{decode, BencodeError, Value};
///
/// assert_eq!(decode(b"i-42e"), Ok(Value::Integer(-42)));
/// assert_eq!(decode(b"11:Hello world"), Ok(Value::string("Hello world")));
/// assert_eq!(decode(b"12:Hello world"), Err(BencodeError::OutOfBounds));
/// assert_eq!(decode(b"i42ex"), Err(BencodeError::Unexpected("x".into())));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut pos = 0;
    let value = decode_value(data, &mut pos, 0)?;

    if let Some(&trailing) = data.get(pos) {
        return Err(BencodeError::unexpected_byte(trailing));
    }

    Ok(value)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    match data.get(*pos) {
        None => Err(BencodeError::eof()),
        Some(b'i') => decode_integer(data, pos),
        Some(b'l') => decode_list(data, pos, depth),
        Some(b'd') => decode_dict(data, pos, depth),
        Some(b'0'..=b'9') => decode_bytes(data, pos),
        Some(&c) => Err(BencodeError::unexpected_byte(c)),
    }
}

fn take_digits<'a>(data: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while data.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    &data[start..*pos]
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    *pos += 1;

    let start = *pos;
    if data.get(*pos) == Some(&b'-') {
        *pos += 1;
    }
    let digits = take_digits(data, pos);

    match data.get(*pos) {
        None => return Err(BencodeError::eof()),
        _ if digits.is_empty() => return Err(BencodeError::InvalidNumber),
        Some(b'e') => {}
        Some(_) => return Err(BencodeError::UnclosedTerm),
    }

    // Leading zeros and `-0` are accepted; out-of-range tokens are not.
    let value: i64 = std::str::from_utf8(&data[start..*pos])
        .ok()
        .and_then(|token| token.parse().ok())
        .ok_or(BencodeError::InvalidNumber)?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let digits = take_digits(data, pos);

    if data.get(*pos) != Some(&b':') {
        return Err(BencodeError::OutOfBounds);
    }

    let len: usize = std::str::from_utf8(digits)
        .ok()
        .and_then(|token| token.parse().ok())
        .ok_or(BencodeError::OutOfBounds)?;

    *pos += 1;

    let end = pos
        .checked_add(len)
        .filter(|&end| end <= data.len())
        .ok_or(BencodeError::OutOfBounds)?;

    let payload = &data[*pos..end];
    *pos = end;

    Ok(match std::str::from_utf8(payload) {
        Ok(text) => Value::Str(text.to_owned()),
        Err(_) => Value::Bytes(Bytes::copy_from_slice(payload)),
    })
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut list = Vec::new();

    loop {
        match data.get(*pos) {
            None => return Err(BencodeError::eof()),
            Some(b'e') => break,
            Some(_) => list.push(decode_value(data, pos, depth + 1)?),
        }
    }

    *pos += 1;
    Ok(Value::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut dict = BTreeMap::new();

    loop {
        match data.get(*pos) {
            None => return Err(BencodeError::eof()),
            Some(b'e') => break,
            Some(_) => {
                let key = decode_value(data, pos, depth + 1)?;
                let value = decode_value(data, pos, depth + 1)?;
                // Duplicate keys: the last occurrence wins.
                dict.insert(key, value);
            }
        }
    }

    *pos += 1;
    Ok(Value::Dict(dict))
}
