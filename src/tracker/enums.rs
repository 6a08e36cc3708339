//! Enumerations for announce operations.

/// Announce lifecycle event.
///
/// Sent to the tracker to indicate a state change of the announcing peer.
pub mod announce_event;
