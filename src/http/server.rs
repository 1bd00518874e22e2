//! HTTP server startup logic.
//!
//! Binds the configured address and serves the router until a shutdown signal
//! arrives and in-flight connections have drained.

use std::net::SocketAddr;

use axum::Router;

use crate::config::HttpConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address '{0}': {1}")]
    Address(String, std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config
        .addr()
        .parse()
        .map_err(|e| ServerError::Address(config.addr(), e))?;

    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
