//! Implementation blocks for the tracker client.

/// TrackerClient core: construction, start, announce registration, close.
pub mod tracker_client;

/// TrackerClient connection: dialing, handshake, read loop, writer task.
pub mod tracker_client_connection;

/// TrackerClient signaling: announces with offers, inbound offers and answers.
pub mod tracker_client_signaling;

/// TrackerClientSettings implementation: construction from configuration.
pub mod tracker_client_settings;

/// TrackerStatus implementation: constructors.
pub mod tracker_status;

/// TrackerClientStatsAtomic implementation: snapshot.
pub mod tracker_client_stats_atomic;

/// TcpDialer implementation: direct and proxied connects.
pub mod tcp_dialer;
