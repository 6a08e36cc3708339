use bitvec::vec::BitVec;

#[derive(Debug)]
pub struct PendingPiece {
    pub index: usize,
    pub buffer: Vec<u8>,
    pub chunk_size: u32,
    pub received: BitVec,
    pub remaining: usize,
}
