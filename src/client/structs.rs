//! Client structure.

/// Swarm session owning the tracker pool and the torrents.
pub mod client;
