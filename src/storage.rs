//! Mapping between pieces and file byte ranges.
//!
//! Torrents split the concatenation of all their files into fixed-size
//! pieces, each verified against its own SHA-1 hash, and pieces may span
//! multiple files. [`PieceMap`] records, for every piece index, which ranges
//! of which files make up that piece, so a freshly hashed piece can be traced
//! back to the bytes on disk.
//!
//! # Components
//!
//! - [`PieceMap`] - Per-torrent piece index to file range mapping
//! - [`PieceEntry`] - Hash and ordered segments of one piece
//! - [`Piece`] - One file range within a piece
//! - [`StorageError`] - File lengths and piece hashes disagree
//!
//! # Examples
//!
//! ```
//! use piecemeal::metainfo::{FileInfo, TorrentInfo};
//! use piecemeal::storage::{PieceMap, StorageError};
//!
//! let info = TorrentInfo::SingleFile {
//!     piece_length: 16384,
//!     pieces: vec![[0u8; 20]; 2],
//!     file: FileInfo::new(["movie.mkv"], 20000),
//! };
//! let map = PieceMap::new(&info).unwrap();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(1).unwrap().segments[0].byte_offset, 16384);
//!
//! // One hash short of what the file needs.
//! let short = TorrentInfo::SingleFile {
//!     piece_length: 16384,
//!     pieces: vec![[0u8; 20]],
//!     file: FileInfo::new(["movie.mkv"], 20000),
//! };
//! assert_eq!(
//!     PieceMap::new(&short).unwrap_err(),
//!     StorageError::MissingPieceHash { index: 1, piece_count: 1 }
//! );
//! ```

mod error;
mod file;
mod piece_map;

pub use error::StorageError;
pub use file::{Piece, PieceEntry};
pub use piece_map::PieceMap;
