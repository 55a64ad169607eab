use std::fmt;

use rand::Rng as _;

use super::announce::url_encode;
use crate::constants::{CLIENT_PREFIX, PEER_ID_LEN};

/// A 20-byte peer identifier.
///
/// Generated ids follow the Azureus-style format `-XX0000-<random>`, where
/// `XX` names the client and `0000` is its version. This crate uses
/// `-PM0001-` followed by 12 random bytes.
///
/// # Examples
///
/// ```
/// use piecemeal::tracker::PeerId;
///
/// let peer_id = PeerId::generate();
/// assert_eq!(peer_id.as_bytes().len(), 20);
/// assert_eq!(peer_id.client_id(), Some("PM0001"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId(pub [u8; PEER_ID_LEN]);

impl PeerId {
    /// Generates a random peer id carrying this crate's client prefix.
    pub fn generate() -> Self {
        let mut id = [0u8; PEER_ID_LEN];
        let (prefix, random) = id.split_at_mut(CLIENT_PREFIX.len());
        prefix.copy_from_slice(CLIENT_PREFIX);
        rand::rng().fill(random);
        Self(id)
    }

    /// Returns `None` unless `bytes` is exactly 20 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; PEER_ID_LEN] {
        &self.0
    }

    /// The six-character client tag of an Azureus-style id, such as
    /// `"UT3500"`.
    pub fn client_id(&self) -> Option<&str> {
        match &self.0[..CLIENT_PREFIX.len()] {
            [b'-', tag @ .., b'-'] => std::str::from_utf8(tag).ok(),
            _ => None,
        }
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.client_id() {
            Some(client) => write!(f, "PeerId({})", client),
            None => write!(f, "PeerId({})", hex::encode(&self.0[..8])),
        }
    }
}

/// Renders the id as it appears in an announce query.
impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&url_encode(&self.0))
    }
}
