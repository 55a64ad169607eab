use thiserror::Error;

/// Inconsistencies between a torrent's declared files and its piece hashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("piece length must be positive")]
    InvalidPieceLength,

    /// The files extend past the last declared piece hash.
    #[error("no hash for piece {index}: only {piece_count} pieces declared")]
    MissingPieceHash { index: u32, piece_count: usize },

    /// The files end before every declared piece hash is used.
    #[error("files cover {actual} pieces but {expected} piece hashes are declared")]
    PieceCountMismatch { expected: usize, actual: usize },
}
