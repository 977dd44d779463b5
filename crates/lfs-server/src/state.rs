use std::path::PathBuf;
use std::sync::Arc;

use lfs_store::FsObjectStore;

use crate::config::ServerConfig;

/// Explicit per-server context handed to every request handler.
#[derive(Clone, Debug)]
pub struct ServerContext {
    pub store: Arc<FsObjectStore>,
    /// Used for links when the request authority has no port of its own.
    pub listen_port: u16,
}

impl ServerContext {
    pub fn new(root: impl Into<PathBuf>, listen_port: u16) -> Self {
        Self {
            store: Arc::new(FsObjectStore::new(root)),
            listen_port,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.root.clone(), config.port)
    }
}
