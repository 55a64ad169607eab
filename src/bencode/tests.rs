use std::collections::BTreeMap;

use bytes::Bytes;
use proptest::prelude::*;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_unclosed() {
    assert_eq!(decode(b"i42a"), Err(BencodeError::UnclosedTerm));
    assert_eq!(decode(b"i42ae"), Err(BencodeError::UnclosedTerm));
}

#[test]
fn test_decode_integer_without_digits() {
    assert_eq!(decode(b"ie"), Err(BencodeError::InvalidNumber));
    assert_eq!(decode(b"i-e"), Err(BencodeError::InvalidNumber));
}

#[test]
fn test_decode_integer_eof() {
    assert_eq!(decode(b"i42"), Err(BencodeError::Unexpected("EOF".into())));
    assert_eq!(decode(b"i"), Err(BencodeError::Unexpected("EOF".into())));
}

#[test]
fn test_decode_integer_lenient_tokens() {
    // Accepted as-is and normalised on encode.
    assert_eq!(decode(b"i-0e").unwrap(), Value::Integer(0));
    assert_eq!(decode(b"i007e").unwrap(), Value::Integer(7));
    assert_eq!(encode(&decode(b"i007e").unwrap()), b"i7e");
}

#[test]
fn test_decode_integer_overflow() {
    assert_eq!(
        decode(b"i99999999999999999999e"),
        Err(BencodeError::InvalidNumber)
    );
}

#[test]
fn test_decode_string() {
    assert_eq!(
        decode(b"11:Hello world").unwrap(),
        Value::string("Hello world")
    );
    assert_eq!(decode(b"0:").unwrap(), Value::string(""));
}

#[test]
fn test_decode_string_out_of_bounds() {
    assert_eq!(decode(b"12:Hello world"), Err(BencodeError::OutOfBounds));
    assert_eq!(decode(b"11Hello world"), Err(BencodeError::OutOfBounds));
    assert_eq!(decode(b"3"), Err(BencodeError::OutOfBounds));
}

#[test]
fn test_decode_binary_string() {
    let value = decode(b"3:\xff\x00\xfe").unwrap();
    assert_eq!(value, Value::Bytes(Bytes::from_static(b"\xff\x00\xfe")));
    assert_eq!(value.as_str(), None);
    assert_eq!(value.as_bytes(), Some(&b"\xff\x00\xfe"[..]));
}

#[test]
fn test_decode_list() {
    assert_eq!(
        decode(b"li42ei-42ee").unwrap(),
        Value::List(vec![Value::Integer(42), Value::Integer(-42)])
    );
    assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
}

#[test]
fn test_decode_list_unterminated() {
    assert_eq!(
        decode(b"li42ei42e"),
        Err(BencodeError::Unexpected("EOF".into()))
    );
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    let dict = result.as_dict().unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(result.get("cow"), Some(&Value::string("moo")));
    assert_eq!(result.get("spam"), Some(&Value::string("eggs")));
}

#[test]
fn test_decode_dict_non_string_keys() {
    let result = decode(b"di1e3:onei2e3:twoe").unwrap();
    let dict = result.as_dict().unwrap();
    assert_eq!(
        dict.get(&Value::Integer(2)),
        Some(&Value::string("two"))
    );
}

#[test]
fn test_decode_dict_unterminated() {
    assert_eq!(
        decode(b"d3:cow3:moo"),
        Err(BencodeError::Unexpected("EOF".into()))
    );
    assert_eq!(
        decode(b"d3:cow"),
        Err(BencodeError::Unexpected("EOF".into()))
    );
}

#[test]
fn test_decode_unexpected_leading_byte() {
    assert_eq!(decode(b"x"), Err(BencodeError::Unexpected("x".into())));
    assert_eq!(decode(b""), Err(BencodeError::Unexpected("EOF".into())));
}

#[test]
fn test_trailing_data_error() {
    assert_eq!(decode(b"i42ex"), Err(BencodeError::Unexpected("x".into())));
    assert_eq!(decode(b"lee"), Err(BencodeError::Unexpected("e".into())));
}

#[test]
fn test_nesting_limit() {
    let mut deep = vec![b'l'; 100];
    deep.extend(vec![b'e'; 100]);
    assert_eq!(decode(&deep), Err(BencodeError::NestingTooDeep));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        encode(&Value::Bytes(Bytes::from_static(b"\x00\x01"))),
        b"2:\x00\x01"
    );
    assert_eq!(encode(&Value::string("spam")), b"4:spam");
}

#[test]
fn test_encode_dict_sorts_keys() {
    let mut dict = BTreeMap::new();
    dict.insert(Value::string("zoo"), Value::Integer(1));
    dict.insert(Value::string("cow"), Value::Integer(2));
    dict.insert(Value::string("announce"), Value::Integer(3));
    assert_eq!(
        encode(&Value::Dict(dict)),
        b"d8:announcei3e3:cowi2e3:zooi1ee"
    );
}

#[test]
fn test_encode_to_writer() {
    let value = decode(b"d4:spaml1:a1:bee").unwrap();
    let mut out = Vec::new();
    encode_to(&value, &mut out).unwrap();
    encode_to(&Value::Integer(7), &mut out).unwrap();
    assert_eq!(out, b"d4:spaml1:a1:beei7e");
}

#[test]
fn test_encode_to_reports_writer_errors() {
    let value = Value::string("longer than the buffer");
    let mut buf = [0u8; 4];
    let mut cursor = std::io::Cursor::new(&mut buf[..]);

    let err = encode_to(&value, &mut cursor).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
}

#[test]
fn test_encode_resorts_unsorted_source() {
    let decoded = decode(b"d1:bi2e1:ai1ee").unwrap();
    assert_eq!(encode(&decoded), b"d1:ai1e1:bi2ee");
}

#[test]
fn test_roundtrip() {
    // Keys must be sorted for a byte-exact roundtrip
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    assert_eq!(encode(&decoded), original);
}

#[test]
fn test_key_order() {
    assert!(Value::Integer(-5) < Value::Integer(3));
    assert!(Value::string("a") < Value::string("b"));
    assert!(Value::string("ab") < Value::Bytes(Bytes::from_static(b"ab\xff")));
    assert!(Value::string("z") > Value::Bytes(Bytes::from_static(b"\x01")));
    assert!(Value::Integer(i64::MAX) < Value::string(""));
    assert!(Value::string("zzz") < Value::List(vec![]));
    assert!(Value::List(vec![]) < Value::Dict(BTreeMap::new()));
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());
    assert_eq!(value.kind(), "Integer");

    let value = Value::string("test");
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());
    assert_eq!(value.kind(), "String");

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
}

#[test]
fn test_pretty_replaces_binary() {
    let value = decode(b"d4:blob3:\xff\xfe\xfd4:sizei3ee").unwrap();
    let rendered = value.pretty().to_string();
    assert_eq!(
        rendered,
        "{\n  \"blob\": <3 bytes>,\n  \"size\": 3,\n}"
    );
}

#[test]
fn test_pretty_nested() {
    let value = decode(b"l1:ale1:bde1:cli1eee").unwrap();
    assert_eq!(
        value.pretty().to_string(),
        "[\n  \"a\",\n  [],\n  \"b\",\n  {},\n  \"c\",\n  [\n    1,\n  ],\n]"
    );
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        ".{0,12}".prop_map(Value::Str),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Value::bytes),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            proptest::collection::btree_map(inner.clone(), inner, 0..6).prop_map(Value::Dict),
        ]
    })
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(value in arb_value()) {
        let encoded = encode(&value);
        prop_assert_eq!(decode(&encoded).unwrap(), value);
    }

    #[test]
    fn prop_encode_is_canonical(value in arb_value()) {
        let encoded = encode(&value);
        let reencoded = encode(&decode(&encoded).unwrap());
        prop_assert_eq!(reencoded, encoded);
    }
}
