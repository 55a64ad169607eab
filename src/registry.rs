//! In-memory torrent registry keyed by info hash.
//!
//! A single worker task owns every registered [`Torrent`](crate::metainfo::Torrent)
//! and answers requests strictly in arrival order. Callers talk to it through a
//! cloneable [`RegistryHandle`]; each request waits at most
//! [`RegistryConfig::request_timeout`] for its reply.
//!
//! The worker stops once every handle has been dropped.
//!
//! # Examples
//!
//! ```
//! use piecemeal::metainfo::Torrent;
//! use piecemeal::registry::{RegistryConfig, TorrentRegistry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let data = b"d8:announce15:http://t.ex/ann13:announce-listll15:http://t.ex/annee\
//!              7:comment4:demo10:created by4:test13:creation datei0e\
//!              4:infod6:lengthi5e4:name5:a.txt12:piece lengthi16384e\
//!              6:pieces20:aaaaaaaaaaaaaaaaaaaaee";
//! let torrent = Torrent::from_bytes(data).unwrap();
//!
//! let registry = TorrentRegistry::spawn(RegistryConfig::default());
//! let info_hash = registry.add(torrent.clone()).await.unwrap();
//!
//! let stored = registry.get(info_hash).await.unwrap().unwrap();
//! assert_eq!(*stored, torrent);
//! # }
//! ```

mod config;
mod error;
mod worker;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use worker::{RegistryHandle, TorrentRegistry};
