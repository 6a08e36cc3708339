//! Client implementation.

/// Client implementation: wiring, torrent registration and teardown.
pub mod client;
