//! Storage seam.

/// Block-level access to piece data.
pub mod piece_storage;
