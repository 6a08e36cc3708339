use bitvec::vec::BitVec;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::pending_piece::PendingPiece;

impl PendingPiece {
    pub fn new(index: usize, size: u64, chunk_size: u32) -> PendingPiece {
        let chunks = size.div_ceil(chunk_size as u64) as usize;
        PendingPiece {
            index,
            buffer: vec![0u8; size as usize],
            chunk_size,
            received: BitVec::repeat(false, chunks),
            remaining: chunks,
        }
    }

    /// `(begin, length)` of every chunk in order.
    pub fn chunks(&self) -> Vec<(u32, u32)> {
        let size = self.buffer.len() as u64;
        (0..self.received.len())
            .map(|chunk| {
                let begin = chunk as u64 * self.chunk_size as u64;
                (begin as u32, (size - begin).min(self.chunk_size as u64) as u32)
            })
            .collect()
    }

    /// Stores a block; returns `false` for a chunk already received.
    pub fn add_block(&mut self, begin: u32, block: &[u8]) -> Result<bool, PeerError> {
        let unrequested = || PeerError::UnrequestedBlock { index: self.index as u32, begin };
        if begin % self.chunk_size != 0 {
            return Err(unrequested());
        }
        let chunk = (begin / self.chunk_size) as usize;
        if chunk >= self.received.len() {
            return Err(unrequested());
        }
        let start = begin as usize;
        let expected = (self.buffer.len() - start).min(self.chunk_size as usize);
        if block.len() != expected {
            return Err(PeerError::MalformedMessage(format!(
                "block of {} bytes, expected {} for piece {} at {}",
                block.len(), expected, self.index, begin
            )));
        }
        if self.received[chunk] {
            return Ok(false);
        }
        self.buffer[start..start + expected].copy_from_slice(block);
        self.received.set(chunk, true);
        self.remaining -= 1;
        Ok(true)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}
