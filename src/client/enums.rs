//! Client error enumeration.

/// Failures adding or addressing torrents.
pub mod client_error;
