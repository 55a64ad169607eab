//! Protocol constants and tuning parameters.

use std::time::Duration;

// ============================================================================
// Client identification
// ============================================================================

/// Client ID prefix for peer ID generation (Azureus-style)
pub const CLIENT_PREFIX: &[u8; 8] = b"-PM0001-";

// ============================================================================
// Metainfo
// ============================================================================

/// Length of a v1 piece hash (SHA-1 digest)
pub const PIECE_HASH_LEN: usize = 20;

/// Length of a peer ID
pub const PEER_ID_LEN: usize = 20;

// ============================================================================
// Registry
// ============================================================================

/// Pending requests the registry worker buffers before callers wait to send
pub const REGISTRY_MAILBOX_CAPACITY: usize = 64;

/// How long a registry caller waits for its reply
pub const REGISTRY_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// Tracker announce
// ============================================================================

/// Default BitTorrent listen port
pub const DEFAULT_PORT: u16 = 6881;
