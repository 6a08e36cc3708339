use std::io;
use std::io::Read;
use sha2::{Digest, Sha256};
use crate::metainfo::structs::piece_digest::PieceDigest;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Streams `reader` and appends one SHA-256 digest per `piece_length` bytes to `out`.
///
/// A final short piece gets its own digest. Reaching end of input ends the
/// stream successfully. Any other read error is returned, and `out` keeps the
/// digests appended up to that point (including the partial piece in progress,
/// when it had at least one byte).
pub fn generate_pieces<R: Read>(reader: &mut R, piece_length: u64, out: &mut Vec<PieceDigest>) -> io::Result<()>
{
    if piece_length == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "piece length must be positive"));
    }

    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let mut hasher = Sha256::new();
        let mut written = 0u64;
        let mut failure = None;

        while written < piece_length {
            let want = (piece_length - written).min(buffer.len() as u64) as usize;
            match reader.read(&mut buffer[..want]) {
                Ok(0) => break,
                Ok(n) => {
                    hasher.update(&buffer[..n]);
                    written += n as u64;
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    failure = Some(error);
                    break;
                }
            }
        }

        if written > 0 {
            out.push(PieceDigest::from_hasher(hasher));
        }
        if let Some(error) = failure {
            return Err(error);
        }
        if written < piece_length {
            return Ok(());
        }
    }
}

/// Digest of a single, fully assembled piece.
pub fn digest_piece(data: &[u8]) -> PieceDigest
{
    PieceDigest::of(data)
}

/// Number of pieces `total_length` bytes split into.
pub fn piece_count(total_length: u64, piece_length: u64) -> usize
{
    if piece_length == 0 {
        return 0;
    }
    total_length.div_ceil(piece_length) as usize
}
