use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use super::config::RegistryConfig;
use super::error::RegistryError;
use crate::metainfo::{InfoHash, Torrent};

enum Request {
    Add {
        info_hash: InfoHash,
        torrent: Torrent,
        reply: oneshot::Sender<()>,
    },
    Get {
        info_hash: InfoHash,
        reply: oneshot::Sender<Option<Arc<Torrent>>>,
    },
    Remove {
        info_hash: InfoHash,
        reply: oneshot::Sender<Option<Arc<Torrent>>>,
    },
    Len {
        reply: oneshot::Sender<usize>,
    },
}

/// The worker side of the registry. Owns the torrents.
pub struct TorrentRegistry {
    torrents: HashMap<InfoHash, Arc<Torrent>>,
    mailbox: mpsc::Receiver<Request>,
}

/// Cloneable client for a running [`TorrentRegistry`].
#[derive(Clone)]
pub struct RegistryHandle {
    sender: mpsc::Sender<Request>,
    request_timeout: Duration,
}

impl TorrentRegistry {
    /// Creates a registry and a handle to it without starting the worker.
    ///
    /// Requests sent before [`run`](Self::run) is polled stay queued.
    pub fn new(config: RegistryConfig) -> (RegistryHandle, Self) {
        let (sender, mailbox) = mpsc::channel(config.mailbox_capacity.max(1));
        let handle = RegistryHandle {
            sender,
            request_timeout: config.request_timeout,
        };
        let registry = Self {
            torrents: HashMap::new(),
            mailbox,
        };
        (handle, registry)
    }

    /// Starts the worker on the current tokio runtime.
    pub fn spawn(config: RegistryConfig) -> RegistryHandle {
        let (handle, registry) = Self::new(config);
        tokio::spawn(registry.run());
        handle
    }

    /// Serves requests until every handle is dropped.
    pub async fn run(mut self) {
        tracing::debug!("registry worker started");
        while let Some(request) = self.mailbox.recv().await {
            self.handle(request);
        }
        tracing::debug!(
            "registry worker stopped with {} torrents",
            self.torrents.len()
        );
    }

    // A dropped reply receiver means the caller gave up; nothing to do.
    fn handle(&mut self, request: Request) {
        match request {
            Request::Add {
                info_hash,
                torrent,
                reply,
            } => {
                if self.torrents.insert(info_hash, Arc::new(torrent)).is_some() {
                    tracing::debug!("replaced torrent {}", info_hash);
                } else {
                    tracing::debug!("registered torrent {}", info_hash);
                }
                let _ = reply.send(());
            }
            Request::Get { info_hash, reply } => {
                let torrent = self.torrents.get(&info_hash).cloned();
                tracing::trace!("lookup {} found={}", info_hash, torrent.is_some());
                let _ = reply.send(torrent);
            }
            Request::Remove { info_hash, reply } => {
                let torrent = self.torrents.remove(&info_hash);
                if torrent.is_some() {
                    tracing::debug!("removed torrent {}", info_hash);
                }
                let _ = reply.send(torrent);
            }
            Request::Len { reply } => {
                let _ = reply.send(self.torrents.len());
            }
        }
    }
}

impl RegistryHandle {
    /// Stores a torrent under its info hash, replacing any previous entry.
    ///
    /// The hash is computed before the request is queued, so a torrent that
    /// cannot be encoded never reaches the worker.
    pub async fn add(&self, torrent: Torrent) -> Result<InfoHash, RegistryError> {
        let info_hash = torrent.info_hash()?;
        self.request(|reply| Request::Add {
            info_hash,
            torrent,
            reply,
        })
        .await?;
        Ok(info_hash)
    }

    /// Looks up a torrent by info hash.
    pub async fn get(&self, info_hash: InfoHash) -> Result<Option<Arc<Torrent>>, RegistryError> {
        self.request(|reply| Request::Get { info_hash, reply }).await
    }

    /// Removes a torrent, returning it if it was registered.
    pub async fn remove(
        &self,
        info_hash: InfoHash,
    ) -> Result<Option<Arc<Torrent>>, RegistryError> {
        self.request(|reply| Request::Remove { info_hash, reply }).await
    }

    /// Number of registered torrents.
    pub async fn len(&self) -> Result<usize, RegistryError> {
        self.request(|reply| Request::Len { reply }).await
    }

    pub async fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.len().await? == 0)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Request,
    ) -> Result<T, RegistryError> {
        let (reply, response) = oneshot::channel();
        let exchange = async {
            self.sender
                .send(build(reply))
                .await
                .map_err(|_| RegistryError::Closed)?;
            response.await.map_err(|_| RegistryError::Closed)
        };

        tokio::time::timeout(self.request_timeout, exchange)
            .await
            .map_err(|_| RegistryError::Timeout)?
    }
}

impl std::fmt::Debug for RegistryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryHandle")
            .field("closed", &self.sender.is_closed())
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
