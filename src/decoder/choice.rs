use super::base::Decoder;

/// Tries `first`, then each of `alternatives` in order, returning the first
/// result without errors.
///
/// When nothing succeeds the last attempted decoder's result is returned;
/// earlier failures are dropped rather than merged. With no alternatives
/// this is `first`'s own result.
pub fn one_of<T: 'static>(first: Decoder<T>, alternatives: Vec<Decoder<T>>) -> Decoder<T> {
    Decoder::new(move |input| {
        let mut result = first.decode(input);
        if result.1.is_empty() {
            return result;
        }
        for alternative in &alternatives {
            result = alternative.decode(input);
            if result.1.is_empty() {
                break;
            }
        }
        result
    })
}

/// Runs `inner`, yielding `Some` on success and `None` on any error. Errors
/// are swallowed.
pub fn optional<T: 'static>(inner: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::new(move |input| {
        let (value, errors) = inner.decode(input);
        if errors.is_empty() {
            (Some(value), errors)
        } else {
            (None, Vec::new())
        }
    })
}
