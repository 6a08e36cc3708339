use std::io;
use async_trait::async_trait;
use parking_lot::RwLock;
use crate::torrent::structs::memory_storage::MemoryStorage;
use crate::torrent::traits::piece_storage::PieceStorage;

impl MemoryStorage {
    pub fn new(piece_length: u64, total_length: u64) -> MemoryStorage {
        MemoryStorage {
            piece_length,
            data: RwLock::new(vec![0u8; total_length as usize]),
        }
    }

    pub fn from_bytes(piece_length: u64, data: Vec<u8>) -> MemoryStorage {
        MemoryStorage {
            piece_length,
            data: RwLock::new(data),
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    fn range(&self, index: usize, begin: u64, length: u64, total: usize) -> io::Result<std::ops::Range<usize>> {
        let start = index as u64 * self.piece_length + begin;
        let end = start + length;
        if end > total as u64 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("range {start}..{end} outside of {total} bytes"),
            ));
        }
        Ok(start as usize..end as usize)
    }
}

#[async_trait]
impl PieceStorage for MemoryStorage {
    async fn read_block(&self, index: usize, begin: u32, length: u32) -> io::Result<Vec<u8>> {
        let data = self.data.read();
        let range = self.range(index, begin as u64, length as u64, data.len())?;
        Ok(data[range].to_vec())
    }

    async fn write_piece(&self, index: usize, piece: &[u8]) -> io::Result<()> {
        let mut data = self.data.write();
        let range = self.range(index, 0, piece.len() as u64, data.len())?;
        data[range].copy_from_slice(piece);
        Ok(())
    }
}
