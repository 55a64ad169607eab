//! Torrent metainfo handling ([BEP-3]).
//!
//! A torrent file (`.torrent`) is a bencoded dictionary holding tracker URLs
//! and an `info` dictionary that describes the content: file names and sizes,
//! the piece length, and the SHA-1 hash of every piece.
//!
//! [`Torrent::from_bytes`] projects the dictionary through the combinators
//! in [`decoder`](crate::decoder), so every missing or mistyped field is
//! reported at once. [`Torrent::to_bytes`] is the exact inverse for the keys
//! that are modelled; it fails only for lengths that exceed a bencode integer.
//!
//! # Examples
//!
//! ```
//! use piecemeal::metainfo::{FileInfo, Torrent, TorrentInfo};
//!
//! let torrent = Torrent {
//!     announce: "http://tracker.example.com/announce".into(),
//!     announce_list: vec![vec!["http://tracker.example.com/announce".into()]],
//!     comment: "example".into(),
//!     created_by: "piecemeal".into(),
//!     creation_date: 1_700_000_000,
//!     info: TorrentInfo::MultiFile {
//!         piece_length: 16384,
//!         pieces: vec![[7u8; 20]; 2],
//!         dir_name: "album".into(),
//!         files: vec![
//!             FileInfo::new(["01.flac"], 20000),
//!             FileInfo::new(["cover", "front.jpg"], 5000),
//!         ],
//!     },
//! };
//!
//! let bytes = torrent.to_bytes().unwrap();
//! let decoded = Torrent::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, torrent);
//! assert_eq!(decoded.info_hash().unwrap(), torrent.info.info_hash().unwrap());
//! ```
//!
//! # Torrent Structure
//!
//! - **info** - Core torrent metadata (hashed to create the info hash)
//!   - `name` - Suggested file/directory name
//!   - `piece length` - Size of each piece in bytes
//!   - `pieces` - Concatenated SHA1 hashes of each piece
//!   - `length` (single-file) OR `files` list of `length` + `path` (multi-file)
//! - **announce** - Primary tracker URL
//! - **announce-list** - Additional tracker tiers (BEP-12)
//! - **creation date** - Unix timestamp when created
//! - **comment** - Free-form comment
//! - **created by** - Client that created the torrent
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod codec;
mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{FileInfo, Torrent, TorrentInfo};
