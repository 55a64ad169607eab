use std::fmt::Write as _;

use super::peer_id::PeerId;
use crate::constants::DEFAULT_PORT;
use crate::metainfo::{InfoHash, MetainfoError, Torrent};

/// Lifecycle event reported with an announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerEvent {
    /// A regular interval announce.
    #[default]
    None,
    Started,
    Stopped,
    Completed,
}

impl TrackerEvent {
    /// Value of the `event` query parameter; empty for [`TrackerEvent::None`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerEvent::None => "",
            TrackerEvent::Started => "started",
            TrackerEvent::Stopped => "stopped",
            TrackerEvent::Completed => "completed",
        }
    }
}

/// Parameters of one HTTP announce.
///
/// # Examples
///
/// ```
/// use piecemeal::metainfo::InfoHash;
/// use piecemeal::tracker::{AnnounceRequest, PeerId, TrackerEvent};
///
/// let request = AnnounceRequest {
///     info_hash: InfoHash::new([0xab; 20]),
///     peer_id: PeerId(*b"-PM0001-abcdefghijkl"),
///     port: 6881,
///     uploaded: 0,
///     downloaded: 0,
///     left: 1024,
///     event: TrackerEvent::Started,
/// };
///
/// let url = request.url("http://tracker.example.com/announce");
/// assert!(url.starts_with("http://tracker.example.com/announce?info_hash=%AB%AB"));
/// assert!(url.ends_with("&left=1024&compact=1&event=started"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    /// Port this client accepts peer connections on.
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    /// Bytes still missing.
    pub left: u64,
    pub event: TrackerEvent,
}

impl AnnounceRequest {
    /// The first announce for a torrent nothing has been downloaded of yet.
    pub fn started(torrent: &Torrent, peer_id: PeerId) -> Result<Self, MetainfoError> {
        Ok(Self {
            info_hash: torrent.info_hash()?,
            peer_id,
            port: DEFAULT_PORT,
            uploaded: 0,
            downloaded: 0,
            left: torrent.info.total_length(),
            event: TrackerEvent::Started,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Updates transfer counters; `left` never goes below zero.
    pub fn with_progress(mut self, uploaded: u64, downloaded: u64, total_length: u64) -> Self {
        self.uploaded = uploaded;
        self.downloaded = downloaded;
        self.left = total_length.saturating_sub(downloaded);
        self
    }

    pub fn with_event(mut self, event: TrackerEvent) -> Self {
        self.event = event;
        self
    }

    /// Renders the query string, without the leading `?`.
    ///
    /// Binary fields are percent-encoded byte by byte. Unreserved bytes
    /// (`A-Z a-z 0-9 - _ . ~`) are kept as is.
    pub fn query_string(&self) -> String {
        let mut query = format!(
            "info_hash={}&peer_id={}&port={}&uploaded={}&downloaded={}&left={}&compact=1",
            url_encode(self.info_hash.as_bytes()),
            url_encode(self.peer_id.as_bytes()),
            self.port,
            self.uploaded,
            self.downloaded,
            self.left
        );

        let event = self.event.as_str();
        if !event.is_empty() {
            query.push_str("&event=");
            query.push_str(event);
        }
        query
    }

    /// Appends the query string to a tracker's announce URL.
    pub fn url(&self, announce: &str) -> String {
        let separator = if announce.contains('?') { '&' } else { '?' };
        format!("{}{}{}", announce, separator, self.query_string())
    }
}

/// Percent-encodes every byte outside the unreserved set.
pub(super) fn url_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for &b in bytes {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}
