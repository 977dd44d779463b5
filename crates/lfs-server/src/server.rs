use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::state::ServerContext;

/// LFS object server.
pub struct LfsServer {
    config: ServerConfig,
}

impl LfsServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn context(&self) -> ServerContext {
        ServerContext::from_config(&self.config)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.context())
    }

    /// Bind the configured address and serve requests.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> ServerResult<()> {
        let app = self.router();
        tracing::info!(
            addr = %listener.local_addr()?,
            root = %self.config.root.display(),
            "LFS server listening"
        );
        axum::serve(listener, app).await?;
        Ok(())
    }
}
