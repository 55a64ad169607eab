//! Tracker announce inputs ([BEP-3]).
//!
//! A client announces itself to a tracker with an HTTP GET whose query
//! string carries the torrent's info hash, the client's peer id and its
//! transfer progress. This module builds those inputs; it performs no
//! network I/O.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod announce;
mod peer_id;

pub use announce::{AnnounceRequest, TrackerEvent};
pub use peer_id::PeerId;

#[cfg(test)]
mod tests;
