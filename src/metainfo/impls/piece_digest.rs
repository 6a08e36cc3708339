use std::fmt;
use std::fmt::Formatter;
use sha2::{Digest, Sha256};
use crate::common::common::bin2hex;
use crate::metainfo::structs::piece_digest::PieceDigest;

pub const PIECE_DIGEST_LENGTH: usize = 32;

impl PieceDigest {
    pub fn of(data: &[u8]) -> PieceDigest {
        PieceDigest(Sha256::digest(data).into())
    }

    pub fn from_hasher(hasher: Sha256) -> PieceDigest {
        PieceDigest(hasher.finalize().into())
    }
}

impl fmt::Display for PieceDigest {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}
