use parking_lot::RwLock;

#[derive(Debug)]
pub struct MemoryStorage {
    pub(crate) piece_length: u64,
    pub(crate) data: RwLock<Vec<u8>>,
}
