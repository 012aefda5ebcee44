//! Listener lifecycle for the notes server

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::tree::{TreeWalker, WalkerConfig};

use super::handlers::AppState;
use super::router;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

/// Everything needed to start serving a notes root.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub root: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub walker: WalkerConfig,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            static_dir: PathBuf::from("client"),
            host: "127.0.0.1".to_string(),
            port: 3000,
            walker: WalkerConfig::server(),
        }
    }
}

impl ServerOptions {
    /// `host:port` string used for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A bound listener plus the router it will serve.
///
/// Binding and serving are split so callers can learn the actual address
/// (for port 0) before requests start flowing.
pub struct NotesServer {
    listener: TcpListener,
    app: Router,
}

impl NotesServer {
    pub async fn bind(options: ServerOptions) -> Result<Self, ServeError> {
        let addr = options.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;

        let state = AppState::new(options.root, TreeWalker::new(options.walker));
        let app = router(state, &options.static_dir);
        Ok(Self { listener, app })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Browser-facing URL for the bound port.
    pub fn url(&self) -> io::Result<String> {
        Ok(format!("http://localhost:{}", self.local_addr()?.port()))
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let url = self.url()?;
        info!("Notes server running at {url}");
        info!("Open {url} in your browser");

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown requested");
}
