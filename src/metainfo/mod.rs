//! Piece metadata and the digest engine.
//!
//! A shared file set is split into fixed-length pieces (the last one may be
//! shorter). Each piece is identified by its SHA-256 digest; the ordered list of
//! digests forms a [`PieceSet`](structs::piece_set::PieceSet), which seeders
//! publish and leechers verify received data against.
//!
//! # Example
//!
//! ```rust
//! use rtc_swarm::metainfo::metainfo::generate_pieces;
//!
//! let data = vec![0u8; 10];
//! let mut digests = Vec::new();
//! generate_pieces(&mut data.as_slice(), 4, &mut digests).unwrap();
//! assert_eq!(digests.len(), 3);
//! ```

/// Identifier and digest structures.
pub mod structs;

/// Implementation blocks for metadata types.
pub mod impls;

/// The digest engine.
#[allow(clippy::module_inception)]
pub mod metainfo;

/// Unit tests for the digest engine.
pub mod tests;
