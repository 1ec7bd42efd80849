//! Host startup errors.

use thiserror::Error;

/// Reasons the host can fail before or while serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `BIND_ADDR` is set but is not an IP address.
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the listener failed.
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
