use std::sync::atomic::AtomicU64;

#[derive(Debug, Default)]
pub struct PeerCountersAtomic {
    pub bytes_written: AtomicU64,
    pub bytes_read: AtomicU64,
    pub chunks_written: AtomicU64,
    pub chunks_read: AtomicU64,
}
