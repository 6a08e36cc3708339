//! Connection, handshake, status and counter structures.

/// One peer session.
pub mod peer_connection;

/// Handshake exchanged before any message.
pub mod handshake;

/// Lifecycle status event.
pub mod peer_status;

/// Snapshot of transfer counters.
pub mod peer_counters;

/// Atomic transfer counters.
pub mod peer_counters_atomic;

/// Piece being assembled from requested chunks.
pub mod pending_piece;
