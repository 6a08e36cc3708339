//! Peer state, error and wire message enumerations.

/// Lifecycle state of a peer connection.
pub mod peer_state;

/// Peer session failures.
pub mod peer_error;

/// Length-prefixed peer wire messages.
pub mod peer_message;
