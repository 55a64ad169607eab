use super::codec;
use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, encode, Value};
use crate::decoder::run;

/// A parsed torrent file.
///
/// Only the keys below are modelled. Any other key in the source file is
/// dropped on decode, so re-encoding such a file does not reproduce it.
///
/// # Examples
///
/// ```
/// use piecemeal::metainfo::Torrent;
///
/// let data = b"d8:announce15:http://t.ex/ann13:announce-listll15:http://t.ex/annee\
///              7:comment4:demo10:created by4:test13:creation datei0e\
///              4:infod6:lengthi5e4:name5:a.txt12:piece lengthi16384e\
///              6:pieces20:aaaaaaaaaaaaaaaaaaaaee";
/// let torrent = Torrent::from_bytes(data).unwrap();
///
/// assert_eq!(torrent.announce, "http://t.ex/ann");
/// assert_eq!(torrent.comment, "demo");
/// assert_eq!(torrent.info.name(), "a.txt");
/// assert_eq!(torrent.info.piece_count(), 1);
/// assert_eq!(torrent.to_bytes().unwrap(), data);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Torrent {
    /// Primary tracker URL.
    pub announce: String,
    /// Multi-tier tracker list ([BEP-12](http://bittorrent.org/beps/bep_0012.html)).
    pub announce_list: Vec<Vec<String>>,
    /// Free-form comment about the torrent.
    pub comment: String,
    /// Name/version of the program that created the torrent.
    pub created_by: String,
    /// Unix timestamp when the torrent was created.
    pub creation_date: i64,
    /// The info dictionary describing the content.
    pub info: TorrentInfo,
}

/// The info dictionary from a torrent file.
///
/// Its canonical encoding is what the [`InfoHash`] is computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TorrentInfo {
    SingleFile {
        piece_length: u64,
        pieces: Vec<[u8; 20]>,
        /// The file; its path is the single segment `name`.
        file: FileInfo,
    },
    MultiFile {
        piece_length: u64,
        pieces: Vec<[u8; 20]>,
        /// Suggested name of the directory holding `files`.
        dir_name: String,
        files: Vec<FileInfo>,
    },
}

/// A file within a torrent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileInfo {
    /// Path segments, relative to the torrent root.
    pub path: Vec<String>,
    /// Size of the file in bytes.
    pub length: u64,
}

impl Torrent {
    /// Parses a torrent file from raw bytes.
    ///
    /// # Errors
    ///
    /// - [`MetainfoError::Bencode`] if the data is not valid bencode
    /// - [`MetainfoError::Fields`] listing every missing or mistyped field
    /// - [`MetainfoError::InvalidFile`] if the fields are inconsistent, for
    ///   example a `pieces` blob whose length is not a multiple of 20
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        Self::from_value(&value)
    }

    /// Projects an already-decoded value tree into a torrent.
    pub fn from_value(value: &Value) -> Result<Self, MetainfoError> {
        let draft = run(value, &codec::torrent())?;
        let torrent = codec::validate(draft)?;
        tracing::debug!(
            "decoded torrent {} ({} pieces, {} files)",
            torrent.info.name(),
            torrent.info.piece_count(),
            torrent.info.files().len()
        );
        Ok(torrent)
    }

    /// Rebuilds the metainfo dictionary.
    ///
    /// # Errors
    ///
    /// [`MetainfoError::InvalidFile`] if a length or the piece length is too
    /// large for a bencode integer.
    pub fn to_value(&self) -> Result<Value, MetainfoError> {
        codec::torrent_to_value(self)
    }

    /// Encodes the torrent in canonical bencode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MetainfoError> {
        Ok(encode(&self.to_value()?))
    }

    /// Returns the info hash of this torrent's info dictionary.
    pub fn info_hash(&self) -> Result<InfoHash, MetainfoError> {
        self.info.info_hash()
    }

    /// Returns all tracker URLs from both `announce` and `announce-list`.
    ///
    /// The primary tracker comes first, followed by the tiers in order.
    /// Duplicates are removed.
    pub fn trackers(&self) -> Vec<String> {
        let mut trackers = vec![self.announce.clone()];

        for tier in &self.announce_list {
            for tracker in tier {
                if !trackers.contains(tracker) {
                    trackers.push(tracker.clone());
                }
            }
        }

        trackers
    }
}

impl TorrentInfo {
    /// Suggested name of the file or directory.
    pub fn name(&self) -> &str {
        match self {
            TorrentInfo::SingleFile { file, .. } => {
                file.path.last().map(String::as_str).unwrap_or_default()
            }
            TorrentInfo::MultiFile { dir_name, .. } => dir_name,
        }
    }

    /// Number of bytes per piece; the last piece may be shorter.
    pub fn piece_length(&self) -> u64 {
        match self {
            TorrentInfo::SingleFile { piece_length, .. }
            | TorrentInfo::MultiFile { piece_length, .. } => *piece_length,
        }
    }

    /// SHA-1 hash of each piece.
    pub fn pieces(&self) -> &[[u8; 20]] {
        match self {
            TorrentInfo::SingleFile { pieces, .. } | TorrentInfo::MultiFile { pieces, .. } => {
                pieces
            }
        }
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().len()
    }

    /// Files in content order. A single-file torrent yields one entry.
    pub fn files(&self) -> &[FileInfo] {
        match self {
            TorrentInfo::SingleFile { file, .. } => std::slice::from_ref(file),
            TorrentInfo::MultiFile { files, .. } => files,
        }
    }

    /// Total size of all files combined.
    pub fn total_length(&self) -> u64 {
        self.files().iter().map(|f| f.length).sum()
    }

    /// Rebuilds the info dictionary.
    pub fn to_value(&self) -> Result<Value, MetainfoError> {
        codec::info_to_value(self)
    }

    /// SHA-1 over the canonical encoding of the info dictionary alone.
    pub fn info_hash(&self) -> Result<InfoHash, MetainfoError> {
        Ok(InfoHash::of(&encode(&self.to_value()?)))
    }
}

impl FileInfo {
    pub fn new<I, S>(path: I, length: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            length,
        }
    }
}
