use std::sync::atomic::Ordering;
use crate::torrent::structs::torrent_stats::TorrentStats;
use crate::torrent::structs::torrent_stats_atomic::TorrentStatsAtomic;

impl TorrentStatsAtomic {
    pub fn snapshot(&self, pieces_completed: u64) -> TorrentStats {
        TorrentStats {
            uploaded: self.uploaded.load(Ordering::Relaxed),
            downloaded: self.downloaded.load(Ordering::Relaxed),
            pieces_completed,
            pieces_failed: self.pieces_failed.load(Ordering::Relaxed),
            peers_active: self.peers_active.load(Ordering::Relaxed),
        }
    }
}
