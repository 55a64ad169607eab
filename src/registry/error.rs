use thiserror::Error;

use crate::metainfo::MetainfoError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The worker did not answer within the configured timeout.
    #[error("registry request timed out")]
    Timeout,

    /// The worker is gone and can no longer accept requests.
    #[error("registry worker closed")]
    Closed,

    /// The torrent has no info hash to be keyed by.
    #[error("torrent cannot be registered: {0}")]
    InvalidTorrent(#[from] MetainfoError),
}
