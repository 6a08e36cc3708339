//! Per-torrent shared state.
//!
//! A [`Torrent`](structs::torrent::Torrent) is the meeting point of everything
//! working on one content id: the published [`PieceSet`](crate::metainfo::structs::piece_set::PieceSet),
//! the storage backend, the completion bitmap and the peer connections. Peer
//! connections reserve missing pieces here one at a time, report verified or
//! failed pieces back, and follow the `have` broadcast to tell their remote
//! about newly completed pieces.
//!
//! The torrent also owns the tracker leases taken on its behalf; closing it
//! releases them and tells every peer connection to shut down.

/// Torrent structures.
pub mod structs;

/// Storage seam.
pub mod traits;

/// Implementation blocks for torrent types.
pub mod impls;

/// Type aliases.
pub mod types;
