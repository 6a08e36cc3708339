//! Implementation blocks for peer types.

/// PeerConnection core: construction, state transitions, accessors, handshake.
pub mod peer_connection;

/// PeerConnection message exchange: serving requests and assembling pieces.
pub mod peer_connection_exchange;

/// PeerMessage implementation: binary encoding and decoding.
pub mod peer_message;

/// Handshake implementation: fixed 68-byte layout.
pub mod handshake;

/// PeerStatus implementation: constructors.
pub mod peer_status;

/// PeerCountersAtomic implementation: snapshot.
pub mod peer_counters_atomic;

/// PendingPiece implementation: chunk layout and assembly.
pub mod pending_piece;
