//! Identifier and digest structures.

/// 20-byte identifier of a shared file set.
pub mod content_id;

/// 32-byte SHA-256 digest of one piece.
pub mod piece_digest;

/// Piece length, total length and the ordered piece digests.
pub mod piece_set;
