use std::cmp::Ordering;

use super::error::StorageError;
use super::file::{Piece, PieceEntry};
use crate::constants::PIECE_HASH_LEN;
use crate::metainfo::{FileInfo, TorrentInfo};

/// Mapping from every piece index to the file ranges it covers.
///
/// Pieces are cut from the concatenation of all files in declaration order,
/// so one piece can span several files and one file usually spans many
/// pieces. Only the final piece may be shorter than the piece length.
///
/// # Examples
///
/// ```
/// use piecemeal::metainfo::{FileInfo, TorrentInfo};
/// use piecemeal::storage::PieceMap;
///
/// let info = TorrentInfo::MultiFile {
///     piece_length: 4,
///     pieces: vec![[0u8; 20], [1u8; 20], [2u8; 20]],
///     dir_name: "d".into(),
///     files: vec![FileInfo::new(["a"], 6), FileInfo::new(["b"], 3)],
/// };
/// let map = PieceMap::new(&info).unwrap();
///
/// // Piece 1 is the last two bytes of `a` followed by the first two of `b`.
/// let piece = map.get(1).unwrap();
/// assert_eq!(piece.segments.len(), 2);
/// assert_eq!(piece.segments[0].byte_range(), 4..6);
/// assert_eq!(piece.segments[1].byte_range(), 0..2);
///
/// // The last piece is short.
/// assert_eq!(map.get(2).unwrap().length(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PieceMap {
    piece_length: u64,
    entries: Vec<PieceEntry>,
}

impl PieceMap {
    /// Maps the pieces of a torrent onto its files.
    ///
    /// # Errors
    ///
    /// Fails when the declared file lengths and the declared piece hashes do
    /// not describe the same number of pieces.
    pub fn new(info: &TorrentInfo) -> Result<Self, StorageError> {
        Self::from_parts(info.files(), info.piece_length(), info.pieces())
    }

    /// Maps pieces of `piece_length` bytes, hashed by `hashes`, onto `files`.
    ///
    /// Files of length zero own no bytes and contribute no segment.
    pub fn from_parts(
        files: &[FileInfo],
        piece_length: u64,
        hashes: &[[u8; PIECE_HASH_LEN]],
    ) -> Result<Self, StorageError> {
        if piece_length == 0 {
            return Err(StorageError::InvalidPieceLength);
        }

        let mut entries = Vec::with_capacity(hashes.len());
        let mut current: Option<PieceEntry> = None;
        let mut piece_index: u32 = 0;
        let mut piece_offset: u64 = 0;

        for file in files {
            if file.length == 0 {
                tracing::trace!("skipping empty file {}", file.path.join("/"));
                continue;
            }

            let mut cursor = 0u64;
            while cursor < file.length {
                let to_fill = piece_length - piece_offset;
                let file_remaining = file.length - cursor;

                let hash = *hashes.get(piece_index as usize).ok_or(
                    StorageError::MissingPieceHash {
                        index: piece_index,
                        piece_count: hashes.len(),
                    },
                )?;

                let (length, closes_piece) = match file_remaining.cmp(&to_fill) {
                    // File ends exactly where the piece ends.
                    Ordering::Equal => (file_remaining, true),
                    // Piece ends inside the file.
                    Ordering::Greater => (to_fill, true),
                    // File ends before the piece does.
                    Ordering::Less => (file_remaining, false),
                };

                current
                    .get_or_insert_with(|| PieceEntry::new(piece_index, hash))
                    .segments
                    .push(Piece {
                        path: file.path.clone(),
                        hash,
                        byte_offset: cursor,
                        length,
                    });
                cursor += length;

                if closes_piece {
                    entries.extend(current.take());
                    piece_index += 1;
                    piece_offset = 0;
                } else {
                    piece_offset += length;
                }
            }
        }

        // A short final piece is still open here.
        entries.extend(current.take());

        if entries.len() != hashes.len() {
            return Err(StorageError::PieceCountMismatch {
                expected: hashes.len(),
                actual: entries.len(),
            });
        }

        tracing::debug!(
            "mapped {} pieces of {} bytes across {} files",
            entries.len(),
            piece_length,
            files.len()
        );

        Ok(Self {
            piece_length,
            entries,
        })
    }

    pub fn piece_length(&self) -> u64 {
        self.piece_length
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the segments of piece `index`.
    pub fn get(&self, index: u32) -> Option<&PieceEntry> {
        self.entries.get(index as usize)
    }

    /// Iterates over pieces in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, PieceEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[PieceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<PieceEntry> {
        self.entries
    }

    /// Indices of every piece holding bytes of the file at `path`.
    pub fn pieces_for_file(&self, path: &[String]) -> Vec<u32> {
        self.entries
            .iter()
            .filter(|entry| entry.touches(path))
            .map(|entry| entry.index)
            .collect()
    }

    /// Total bytes covered by all pieces.
    pub fn total_length(&self) -> u64 {
        self.entries.iter().map(PieceEntry::length).sum()
    }
}

impl<'a> IntoIterator for &'a PieceMap {
    type Item = &'a PieceEntry;
    type IntoIter = std::slice::Iter<'a, PieceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
