use crate::metainfo::structs::piece_digest::PieceDigest;

/// The published description of a file set's pieces.
///
/// `digests[i]` covers bytes `[i * piece_length, min((i + 1) * piece_length, total_length))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSet {
    pub piece_length: u64,
    pub total_length: u64,
    pub digests: Vec<PieceDigest>,
}
