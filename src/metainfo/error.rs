use thiserror::Error;

use crate::bencode::BencodeError;
use crate::decoder::FieldErrors;

/// Errors that can occur when decoding a torrent file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// One or more fields are missing or have the wrong type.
    #[error("invalid metainfo: {0}")]
    Fields(#[from] FieldErrors),

    /// The fields are well-typed but inconsistent with each other.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// An info hash was not exactly 20 bytes.
    #[error("invalid info hash length")]
    InvalidInfoHashLength,
}
