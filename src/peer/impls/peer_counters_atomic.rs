use std::sync::atomic::Ordering;
use crate::peer::structs::peer_counters::PeerCounters;
use crate::peer::structs::peer_counters_atomic::PeerCountersAtomic;

impl PeerCountersAtomic {
    pub fn snapshot(&self) -> PeerCounters {
        PeerCounters {
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            chunks_written: self.chunks_written.load(Ordering::Relaxed),
            chunks_read: self.chunks_read.load(Ordering::Relaxed),
        }
    }

    pub fn record_written(&self, bytes: u64) {
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
        self.chunks_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read(&self, bytes: u64) {
        self.bytes_read.fetch_add(bytes, Ordering::Relaxed);
        self.chunks_read.fetch_add(1, Ordering::Relaxed);
    }
}
