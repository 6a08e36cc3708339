//! Data structures for announce operations.

/// Announce request parameters.
///
/// Content id, local peer id and the transfer totals reported to the tracker.
pub mod announce_request;

/// 20-byte peer identifier.
///
/// A wrapper around `[u8; 20]` identifying a swarm participant, both on the
/// tracker and in the peer wire handshake.
pub mod peer_id;
