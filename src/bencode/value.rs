use bytes::Bytes;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::pretty::Pretty;

/// A bencode value.
///
/// Bencode has four wire types: integers, byte strings, lists, and
/// dictionaries. Byte strings are split into two variants on decode:
/// payloads that are valid UTF-8 become [`Value::Str`], everything else
/// (piece hashes, binary blobs) stays [`Value::Bytes`].
///
/// Dictionary keys may be any value. They are kept in an ordered map using
/// the canonical key order (see the [`Ord`] implementation), so encoding a
/// dictionary always produces sorted keys and two dictionaries compare equal
/// regardless of the order their keys appeared in on the wire.
///
/// # Examples
///
/// ```
/// use piecemeal::bencode::Value;
///
/// let int = Value::Integer(42);
/// let text = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let int2: Value = 42i64.into();
/// let text2: Value = "hello".into();
///
/// assert_eq!(int, int2);
/// assert_eq!(text.as_str(), Some("hello"));
/// assert_eq!(text, text2);
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string whose payload is valid UTF-8.
    Str(String),
    /// A byte string whose payload is not valid UTF-8.
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary, kept in canonical key order.
    Dict(BTreeMap<Value, Value>),
}

impl Value {
    /// Creates a text value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Creates a byte string value, choosing [`Value::Str`] when the payload
    /// is valid UTF-8 and [`Value::Bytes`] otherwise.
    ///
    /// This mirrors what [`decode`](super::decode) produces, so values built
    /// this way survive an encode/decode round trip unchanged.
    ///
    /// ```
    /// use piecemeal::bencode::Value;
    ///
    /// assert_eq!(Value::bytes(&b"spam"[..]), Value::string("spam"));
    /// assert!(matches!(Value::bytes(vec![0xff, 0xfe]), Value::Bytes(_)));
    /// ```
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        let b = b.into();
        match std::str::from_utf8(&b) {
            Ok(s) => Value::Str(s.to_owned()),
            Err(_) => Value::Bytes(b),
        }
    }

    /// Returns the name of this value's kind, as used in field errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Str(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
            Value::Dict(_) => "Dict",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as text, if it is a UTF-8 byte string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw payload of either byte string variant.
    ///
    /// ```
    /// use piecemeal::bencode::Value;
    ///
    /// assert_eq!(Value::string("hi").as_bytes(), Some(&b"hi"[..]));
    /// assert_eq!(Value::Integer(1).as_bytes(), None);
    /// ```
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&BTreeMap<Value, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a text key in this value if it is a dictionary.
    ///
    /// ```
    /// use piecemeal::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get("foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict()?.get(&Value::string(key))
    }

    /// Returns an adapter that renders this value as an indented tree.
    ///
    /// Binary payloads are replaced by a `<N bytes>` placeholder, so the
    /// output is for diagnostics only and cannot be parsed back.
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty::new(self)
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Integer(_) => 0,
            Value::Str(_) | Value::Bytes(_) => 1,
            Value::List(_) => 2,
            Value::Dict(_) => 3,
        }
    }
}

/// Canonical key order.
///
/// Integers compare numerically. Both byte string variants compare together
/// byte-wise, which for UTF-8 text is the same as code point order; identical
/// payloads order `Str` before `Bytes`. Lists compare element-wise and
/// dictionaries entry-wise. Values of different kinds order as
/// `Integer < byte strings < List < Dict`.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Dict(a), Value::Dict(b)) => a.cmp(b),
            _ => match (self.as_bytes(), other.as_bytes()) {
                (Some(a), Some(b)) => a.cmp(b).then_with(|| {
                    matches!(self, Value::Bytes(_)).cmp(&matches!(other, Value::Bytes(_)))
                }),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Value, Value>> for Value {
    fn from(d: BTreeMap<Value, Value>) -> Self {
        Value::Dict(d)
    }
}
