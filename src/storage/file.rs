use std::ops::Range;

use crate::constants::PIECE_HASH_LEN;

/// A contiguous byte range of one file that belongs to a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Path segments of the file, as declared in the torrent.
    pub path: Vec<String>,
    /// Hash of the piece this range belongs to.
    pub hash: [u8; PIECE_HASH_LEN],
    /// Offset of the range within the file.
    pub byte_offset: u64,
    /// Number of bytes the file contributes to the piece.
    pub length: u64,
}

/// All file ranges making up one piece, in content order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceEntry {
    pub index: u32,
    pub hash: [u8; PIECE_HASH_LEN],
    pub segments: Vec<Piece>,
}

impl Piece {
    pub fn byte_range(&self) -> Range<u64> {
        self.byte_offset..self.byte_offset + self.length
    }
}

impl PieceEntry {
    pub(super) fn new(index: u32, hash: [u8; PIECE_HASH_LEN]) -> Self {
        Self {
            index,
            hash,
            segments: Vec::new(),
        }
    }

    /// Total bytes in this piece.
    pub fn length(&self) -> u64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Returns true if any segment lies in the file at `path`.
    pub fn touches(&self, path: &[String]) -> bool {
        self.segments.iter().any(|s| s.path == path)
    }
}
