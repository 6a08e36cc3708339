use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeerCounters {
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub chunks_written: u64,
    pub chunks_read: u64,
}
