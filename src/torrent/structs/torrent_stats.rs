use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TorrentStats {
    pub uploaded: u64,
    pub downloaded: u64,
    pub pieces_completed: u64,
    pub pieces_failed: u64,
    pub peers_active: i64,
}
