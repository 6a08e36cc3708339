use std::sync::atomic::AtomicU64;

#[derive(Debug, Default)]
pub struct TrackerClientStatsAtomic {
    pub offers_sent: AtomicU64,
    pub answers_received: AtomicU64,
    pub offers_received: AtomicU64,
    pub answers_sent: AtomicU64,
    pub negotiation_failures: AtomicU64,
    pub channels_opened: AtomicU64,
}
