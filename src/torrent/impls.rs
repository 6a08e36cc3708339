//! Implementation blocks for torrent types.

/// Torrent implementation: reservation, completion, peers and teardown.
pub mod torrent;

/// TorrentStatsAtomic implementation: snapshot.
pub mod torrent_stats_atomic;

/// TorrentSpec implementation: builders.
pub mod torrent_spec;

/// MemoryStorage implementation, including the PieceStorage trait.
pub mod memory_storage;
