//! piecemeal - BitTorrent metainfo toolkit
//!
//! Reads and writes `.torrent` files and maps their pieces onto the files
//! they cover.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding
//! - [`decoder`] - Error-accumulating decoders from bencode values to typed data
//! - [`metainfo`] - BEP-3/12 torrent metainfo and info hashes
//! - [`storage`] - Piece to file range mapping
//! - [`registry`] - In-memory torrent store served by a worker task
//! - [`tracker`] - Peer ids and announce query strings
//! - [`constants`] - Protocol constants and tuning parameters

pub mod bencode;
pub mod constants;
pub mod decoder;
pub mod metainfo;
pub mod registry;
pub mod storage;
pub mod tracker;

#[cfg(test)]
mod fixtures;

pub use bencode::{decode, encode, BencodeError, Value};
pub use decoder::{Decoder, FieldError, FieldErrors};
pub use metainfo::{FileInfo, InfoHash, MetainfoError, Torrent, TorrentInfo};
pub use registry::{RegistryConfig, RegistryError, RegistryHandle, TorrentRegistry};
pub use storage::{Piece, PieceEntry, PieceMap, StorageError};
pub use tracker::{AnnounceRequest, PeerId, TrackerEvent};
