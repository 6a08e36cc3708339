/// SHA-256 digest of one piece.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct PieceDigest(pub [u8; 32]);
