//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// WebSocket tracker client settings (handshake, announce, proxy, headers).
pub mod tracker_client_config;

/// WebRTC negotiation settings.
pub mod rtc_config;

/// A single STUN/TURN server entry.
pub mod ice_server_config;

/// Peer connection settings (chunk size, observer capacity).
pub mod peer_config;
