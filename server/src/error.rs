//! Startup and serve errors for the host binary.

use std::net::SocketAddr;

/// Errors that stop `employee-server`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },

    /// Leptos options could not be loaded from the environment.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
