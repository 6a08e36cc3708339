//! Connection seams.

/// Opens the TCP stream a WebSocket handshake runs over.
pub mod dialer;
