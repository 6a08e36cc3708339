//! Client, settings, status and bookkeeping structures.

/// The tracker client.
pub mod tracker_client;

/// Shared construction parameters for tracker clients.
pub mod tracker_client_settings;

/// Mutable state guarded by the client's lock.
pub mod tracker_client_state;

/// ConnStatus / AnnounceStatus event.
pub mod tracker_status;

/// Announce registration of one content id.
pub mod announce_slot;

/// Local offer awaiting an answer.
pub mod outbound_offer;

/// Snapshot of signaling counters.
pub mod tracker_client_stats;

/// Atomic signaling counters.
pub mod tracker_client_stats_atomic;

/// Default TCP dialer with optional HTTP CONNECT proxy.
pub mod tcp_dialer;
