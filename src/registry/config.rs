use std::time::Duration;

use crate::constants::{REGISTRY_MAILBOX_CAPACITY, REGISTRY_REQUEST_TIMEOUT};

/// Tuning for a [`TorrentRegistry`](super::TorrentRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Requests buffered in the worker's mailbox before senders wait.
    pub mailbox_capacity: usize,
    /// Upper bound on how long a caller waits for a reply, queueing included.
    pub request_timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: REGISTRY_MAILBOX_CAPACITY,
            request_timeout: REGISTRY_REQUEST_TIMEOUT,
        }
    }
}

impl RegistryConfig {
    /// Defaults, overridden by `PIECEMEAL_REGISTRY_CAPACITY` and
    /// `PIECEMEAL_REGISTRY_TIMEOUT_MS` when they hold valid numbers.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(capacity) = std::env::var("PIECEMEAL_REGISTRY_CAPACITY") {
            match capacity.parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.mailbox_capacity = capacity,
                _ => tracing::warn!("ignoring PIECEMEAL_REGISTRY_CAPACITY={}", capacity),
            }
        }

        if let Ok(timeout) = std::env::var("PIECEMEAL_REGISTRY_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(millis) => config.request_timeout = Duration::from_millis(millis),
                Err(_) => tracing::warn!("ignoring PIECEMEAL_REGISTRY_TIMEOUT_MS={}", timeout),
            }
        }

        config
    }

    /// Sets the mailbox capacity. Zero is raised to one.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
