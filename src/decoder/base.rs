use std::fmt;
use std::rc::Rc;

use super::error::{FieldError, FieldErrors};
use crate::bencode::Value;

type DecodeFn<T> = dyn Fn(&Value) -> (T, Vec<FieldError>);

/// A typed projection from a [`Value`] tree.
///
/// Running a decoder always yields a value, possibly a placeholder, together
/// with every [`FieldError`] found along the way. Combinators thread that
/// pair through explicitly, so sibling mismatches in one dictionary are all
/// reported in a single pass.
///
/// Decoders are cheap to clone (reference counted) and are meant to be
/// built on the thread that runs them.
///
/// # Examples
///
/// ```
/// use piecemeal::bencode::decode;
/// use piecemeal::decoder::{field, int, run, string, success};
///
/// let person = field("name", string(), |name| {
///     field("age", int(), move |age| success((name.clone(), age)))
/// });
///
/// let value = decode(b"d3:agei30e4:name3:Bobe").unwrap();
/// assert_eq!(run(&value, &person).unwrap(), ("Bob".to_string(), 30));
///
/// // Both mismatches are reported together.
/// let value = decode(b"d3:age2:xx4:namei1ee").unwrap();
/// assert_eq!(run(&value, &person).unwrap_err().len(), 2);
/// ```
pub struct Decoder<T> {
    run: Rc<DecodeFn<T>>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decoder<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Decoder<T> {
    /// Wraps a raw decoding function.
    pub fn new(f: impl Fn(&Value) -> (T, Vec<FieldError>) + 'static) -> Self {
        Self { run: Rc::new(f) }
    }

    /// Applies the decoder to `input`, returning the value and its errors.
    pub fn decode(&self, input: &Value) -> (T, Vec<FieldError>) {
        (self.run)(input)
    }

    /// Method form of [`then`].
    pub fn then<U: 'static>(self, f: impl Fn(T) -> Decoder<U> + 'static) -> Decoder<U> {
        then(self, f)
    }

    /// Transforms the decoded value, keeping the errors untouched.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Decoder<U> {
        Decoder::new(move |input| {
            let (value, errors) = self.decode(input);
            (f(value), errors)
        })
    }
}

/// Ignores its input and yields `value` with no errors.
pub fn success<T: Clone + 'static>(value: T) -> Decoder<T> {
    Decoder::new(move |_| (value.clone(), Vec::new()))
}

/// Ignores its input's contents and yields `default` with a single error
/// saying `expected` was wanted but the input's kind was found.
pub fn failure<T: Clone + 'static>(default: T, expected: &'static str) -> Decoder<T> {
    Decoder::new(move |input| {
        (
            default.clone(),
            vec![FieldError::new(expected, input.kind())],
        )
    })
}

/// Runs `first`, feeds its value to `f`, and runs the resulting decoder on
/// the same input.
///
/// The second decoder's value is returned. The errors are `first`'s when it
/// failed, otherwise the second decoder's.
pub fn then<A, B>(first: Decoder<A>, f: impl Fn(A) -> Decoder<B> + 'static) -> Decoder<B>
where
    A: 'static,
    B: 'static,
{
    Decoder::new(move |input| {
        let (value, first_errors) = first.decode(input);
        let (next, next_errors) = f(value).decode(input);
        if first_errors.is_empty() {
            (next, next_errors)
        } else {
            (next, first_errors)
        }
    })
}

/// Runs `decoder` against a root value.
///
/// # Errors
///
/// Returns every accumulated [`FieldError`] when there is at least one.
pub fn run<T: 'static>(value: &Value, decoder: &Decoder<T>) -> Result<T, FieldErrors> {
    let (decoded, errors) = decoder.decode(value);
    if errors.is_empty() {
        Ok(decoded)
    } else {
        Err(FieldErrors::new(errors))
    }
}
