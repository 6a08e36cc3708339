use std::sync::atomic::{AtomicI64, AtomicU64};

#[derive(Debug, Default)]
pub struct TorrentStatsAtomic {
    pub uploaded: AtomicU64,
    pub downloaded: AtomicU64,
    pub pieces_failed: AtomicU64,
    pub peers_active: AtomicI64,
}
