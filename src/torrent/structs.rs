//! Torrent structures.

/// Shared per-torrent state.
pub mod torrent;

/// Mutable bookkeeping behind the torrent lock.
pub mod torrent_state;

/// Snapshot of torrent statistics.
pub mod torrent_stats;

/// Atomic torrent statistics.
pub mod torrent_stats_atomic;

/// Everything needed to add a torrent to a client.
pub mod torrent_spec;

/// In-memory piece storage.
pub mod memory_storage;
