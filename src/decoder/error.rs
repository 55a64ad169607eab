use thiserror::Error;

/// A single type mismatch found while decoding a value tree.
///
/// `path` names the chain of dictionary fields that led to the mismatch,
/// outermost first. It is empty when the mismatch is at the decoder's root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}expected {expected}, found {found}", path_prefix(.path))]
pub struct FieldError {
    pub expected: &'static str,
    pub found: &'static str,
    pub path: Vec<String>,
}

impl FieldError {
    pub fn new(expected: &'static str, found: &'static str) -> Self {
        Self {
            expected,
            found,
            path: Vec::new(),
        }
    }

    /// Builder-style variant of [`FieldError::new`] that sets the path.
    pub fn at<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }
}

fn path_prefix(path: &[String]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{}: ", path.join("."))
    }
}

/// Every [`FieldError`] reported by one decode pass.
///
/// Returned by [`run`](super::run) whenever at least one error was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field error(s): {}", .0.len(), join_errors(.0))]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
