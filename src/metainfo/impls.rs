//! Implementation blocks for metadata types.

/// ContentId implementation: Display, FromStr, Serialize, Deserialize.
pub mod content_id;

/// PieceDigest implementation: Display, hashing of piece data.
pub mod piece_digest;

/// PieceSet implementation: construction from a reader, piece geometry, verification.
pub mod piece_set;
