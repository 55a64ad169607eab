//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format BitTorrent uses for `.torrent` files.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Byte strings decode to [`Value::Str`] when they hold valid UTF-8 and to
//! [`Value::Bytes`] otherwise.
//!
//! # Examples
//!
//! ```
//! use piecemeal::bencode::{decode, encode, Value};
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! assert_eq!(
//!     value,
//!     Value::List(vec![Value::string("spam"), Value::Integer(42)])
//! );
//!
//! // Dictionaries are re-sorted on encode.
//! let value = decode(b"d3:zoo1:z3:cow3:mooe").unwrap();
//! assert_eq!(encode(&value), b"d3:cow3:moo3:zoo1:ze");
//! ```
//!
//! # Error Handling
//!
//! Decoding stops at the first malformed byte:
//!
//! - [`BencodeError::UnclosedTerm`] - integer missing its `e`
//! - [`BencodeError::InvalidNumber`] - integer with no digits
//! - [`BencodeError::Unexpected`] - stray byte, or `"EOF"` when input runs out
//! - [`BencodeError::OutOfBounds`] - bad string length or missing `:`
//! - [`BencodeError::NestingTooDeep`] - recursion limit exceeded (max 64 levels)
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod pretty;
mod value;

pub use decode::decode;
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use pretty::Pretty;
pub use value::Value;

#[cfg(test)]
mod tests;
