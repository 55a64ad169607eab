use std::collections::BTreeMap;

use super::base::Decoder;
use super::error::FieldError;
use crate::bencode::Value;

/// Decodes every element of a list with `inner`.
///
/// If any element fails, all decoded elements are discarded and the errors
/// of every failing element are returned together.
pub fn list<T: 'static>(inner: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::new(move |input| match input {
        Value::List(items) => {
            let mut values = Vec::with_capacity(items.len());
            let mut errors = Vec::new();
            for item in items {
                let (value, item_errors) = inner.decode(item);
                if item_errors.is_empty() {
                    values.push(value);
                } else {
                    errors.extend(item_errors);
                }
            }
            if errors.is_empty() {
                (values, errors)
            } else {
                (Vec::new(), errors)
            }
        }
        other => (Vec::new(), vec![FieldError::new("List", other.kind())]),
    })
}

/// Decodes every entry of a dictionary, keys with `key` and values with
/// `value`. Same all-or-nothing policy as [`list`].
pub fn dict<K, V>(key: Decoder<K>, value: Decoder<V>) -> Decoder<BTreeMap<K, V>>
where
    K: Ord + 'static,
    V: 'static,
{
    Decoder::new(move |input| match input {
        Value::Dict(entries) => {
            let mut decoded = BTreeMap::new();
            let mut errors = Vec::new();
            for (k, v) in entries {
                let (k, key_errors) = key.decode(k);
                let (v, value_errors) = value.decode(v);
                if key_errors.is_empty() && value_errors.is_empty() {
                    decoded.insert(k, v);
                } else {
                    errors.extend(key_errors);
                    errors.extend(value_errors);
                }
            }
            if errors.is_empty() {
                (decoded, errors)
            } else {
                (BTreeMap::new(), errors)
            }
        }
        other => (BTreeMap::new(), vec![FieldError::new("Dict", other.kind())]),
    })
}

/// Extracts the dictionary field `name` with `inner`, then continues with the
/// decoder built by `continuation` from the extracted value.
///
/// The continuation runs against the same input as this decoder, so chained
/// `field` calls read several keys out of one dictionary. When the input is
/// not a dictionary or the key is absent, `inner` runs against the whole
/// input, which yields a natural type mismatch. Errors from `inner` are
/// tagged with `name` and followed by the continuation's errors.
///
/// ```
/// use piecemeal::bencode::decode;
/// use piecemeal::decoder::{field, int, run, success};
///
/// let length = field("length", int(), success);
/// let value = decode(b"d6:lengthi7ee").unwrap();
/// assert_eq!(run(&value, &length).unwrap(), 7);
///
/// let errors = run(&decode(b"de").unwrap(), &length).unwrap_err();
/// assert_eq!(errors.errors()[0].to_string(), "length: expected Integer, found Dict");
/// ```
pub fn field<A, B>(
    name: &str,
    inner: Decoder<A>,
    continuation: impl Fn(A) -> Decoder<B> + 'static,
) -> Decoder<B>
where
    A: 'static,
    B: 'static,
{
    let name = name.to_owned();
    let key = Value::string(name.as_str());
    Decoder::new(move |input| {
        let target = input
            .as_dict()
            .and_then(|entries| entries.get(&key))
            .unwrap_or(input);

        let (value, mut errors) = inner.decode(target);
        for error in &mut errors {
            error.path.insert(0, name.clone());
        }

        let (next, next_errors) = continuation(value).decode(input);
        errors.extend(next_errors);
        (next, errors)
    })
}
