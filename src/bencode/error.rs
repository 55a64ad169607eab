use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// An integer, list or dictionary is missing its `e` terminator.
    #[error("unclosed term")]
    UnclosedTerm,

    /// An integer token has no digits.
    #[error("invalid number")]
    InvalidNumber,

    /// A byte that starts no production, or the end of input (`"EOF"`).
    #[error("unexpected {0}")]
    Unexpected(String),

    /// A string length is malformed or runs past the end of the buffer.
    #[error("string length out of bounds")]
    OutOfBounds,

    #[error("nesting too deep")]
    NestingTooDeep,
}

impl BencodeError {
    pub(crate) fn eof() -> Self {
        BencodeError::Unexpected("EOF".into())
    }

    pub(crate) fn unexpected_byte(byte: u8) -> Self {
        BencodeError::Unexpected((byte as char).to_string())
    }
}
