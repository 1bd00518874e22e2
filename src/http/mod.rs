//! HTTP server module.
//!
//! Plain-HTTP serving with graceful shutdown on SIGTERM/Ctrl+C. TLS
//! termination is left to the fronting ingress or reverse proxy.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
