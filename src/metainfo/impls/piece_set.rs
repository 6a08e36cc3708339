use std::io;
use std::io::Read;
use byteorder::{BigEndian, WriteBytesExt};
use sha1::{Digest, Sha1};
use crate::metainfo::metainfo::{digest_piece, generate_pieces, piece_count};
use crate::metainfo::structs::content_id::ContentId;
use crate::metainfo::structs::piece_digest::PieceDigest;
use crate::metainfo::structs::piece_set::PieceSet;

struct CountingReader<'a, R: Read> {
    inner: &'a mut R,
    count: u64,
}

impl<R: Read> Read for CountingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

impl PieceSet {
    pub fn from_reader<R: Read>(reader: &mut R, piece_length: u64) -> io::Result<PieceSet> {
        let mut counting = CountingReader { inner: reader, count: 0 };
        let mut digests = Vec::new();
        generate_pieces(&mut counting, piece_length, &mut digests)?;
        Ok(PieceSet {
            piece_length,
            total_length: counting.count,
            digests,
        })
    }

    pub fn from_bytes(data: &[u8], piece_length: u64) -> io::Result<PieceSet> {
        let mut reader = data;
        Self::from_reader(&mut reader, piece_length)
    }

    pub fn piece_count(&self) -> usize {
        self.digests.len()
    }

    /// Byte offset of piece `index` within the file set.
    pub fn piece_offset(&self, index: usize) -> u64 {
        index as u64 * self.piece_length
    }

    /// Length of piece `index`; `None` past the last piece.
    pub fn piece_size(&self, index: usize) -> Option<u64> {
        if index >= piece_count(self.total_length, self.piece_length) {
            return None;
        }
        let offset = self.piece_offset(index);
        Some((self.total_length - offset).min(self.piece_length))
    }

    pub fn digest(&self, index: usize) -> Option<&PieceDigest> {
        self.digests.get(index)
    }

    pub fn verify(&self, index: usize, data: &[u8]) -> bool {
        match (self.digest(index), self.piece_size(index)) {
            (Some(expected), Some(size)) if size == data.len() as u64 => digest_piece(data) == *expected,
            _ => false,
        }
    }

    /// SHA-1 of `piece_length (u64 BE) || total_length (u64 BE) || digests`.
    pub fn content_id(&self) -> ContentId {
        let mut encoded = Vec::with_capacity(16 + self.digests.len() * 32);
        let _ = encoded.write_u64::<BigEndian>(self.piece_length);
        let _ = encoded.write_u64::<BigEndian>(self.total_length);
        for digest in &self.digests {
            encoded.extend_from_slice(&digest.0);
        }
        ContentId(Sha1::digest(&encoded).into())
    }
}
