//! Typed decoders over bencode value trees.
//!
//! A [`Decoder<T>`] projects a [`Value`](crate::bencode::Value) into a `T`.
//! Unlike `Result`-based parsing, a decoder never stops at the first problem:
//! it always produces a value (a placeholder where the input was wrong) and
//! a list of [`FieldError`]s, and every combinator merges those lists by a
//! fixed rule:
//!
//! | Combinator | Errors returned |
//! |------------|-----------------|
//! | [`field`] | the field's errors followed by the continuation's |
//! | [`list`], [`dict`] | every failing element's; successes are discarded |
//! | [`one_of`] | none on the first success, else the last attempt's |
//! | [`optional`] | never any |
//! | [`then`] | the first decoder's if it failed, else the second's |
//!
//! [`run`] turns the pair into a `Result`.
//!
//! # Examples
//!
//! ```
//! use piecemeal::bencode::decode;
//! use piecemeal::decoder::{field, int, list, optional, run, string, success};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Track {
//!     title: String,
//!     seconds: i64,
//!     tags: Option<Vec<String>>,
//! }
//!
//! let track = field("title", string(), |title| {
//!     field("seconds", int(), move |seconds| {
//!         let title = title.clone();
//!         field("tags", optional(list(string())), move |tags| {
//!             success(Track { title: title.clone(), seconds, tags })
//!         })
//!     })
//! });
//!
//! let value = decode(b"d7:secondsi215e5:title5:Intro4:tagsl4:live4:demoee").unwrap();
//! let decoded = run(&value, &track).unwrap();
//! assert_eq!(decoded.seconds, 215);
//! assert_eq!(decoded.tags, Some(vec!["live".to_string(), "demo".to_string()]));
//! ```

mod base;
mod choice;
mod collection;
mod error;
mod primitive;

pub use base::{failure, run, success, then, Decoder};
pub use choice::{one_of, optional};
pub use collection::{dict, field, list};
pub use error::{FieldError, FieldErrors};
pub use primitive::{bytes, int, string};
