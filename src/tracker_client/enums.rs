//! Signaling state and error enumerations.

/// Connection state of a tracker client.
pub mod signaling_state;

/// Transport and announce failures.
pub mod tracker_client_error;
