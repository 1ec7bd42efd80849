//! Live-connection status as seen by the UI.
//!
//! The socket client that drives this lives outside the shell; the app only
//! provides the signal and mounts the reconnect indicator from it.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Streaming connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Socket is open (or no socket has been requested yet).
    #[default]
    Connected,
    /// Connection dropped and a retry is in flight.
    Reconnecting,
}

impl ConnectionStatus {
    pub fn shows_reconnect_loader(self) -> bool {
        matches!(self, Self::Reconnecting)
    }
}
