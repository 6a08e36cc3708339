use std::io;
use async_trait::async_trait;

/// Piece data backend. Only verified pieces are ever written.
#[async_trait]
pub trait PieceStorage: Send + Sync {
    async fn read_block(&self, index: usize, begin: u32, length: u32) -> io::Result<Vec<u8>>;

    async fn write_piece(&self, index: usize, data: &[u8]) -> io::Result<()>;
}
