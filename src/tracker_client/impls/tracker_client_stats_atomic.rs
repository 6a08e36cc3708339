use std::sync::atomic::Ordering;
use crate::tracker_client::structs::tracker_client_stats::TrackerClientStats;
use crate::tracker_client::structs::tracker_client_stats_atomic::TrackerClientStatsAtomic;

impl TrackerClientStatsAtomic {
    pub fn snapshot(&self) -> TrackerClientStats {
        TrackerClientStats {
            offers_sent: self.offers_sent.load(Ordering::Relaxed),
            answers_received: self.answers_received.load(Ordering::Relaxed),
            offers_received: self.offers_received.load(Ordering::Relaxed),
            answers_sent: self.answers_sent.load(Ordering::Relaxed),
            negotiation_failures: self.negotiation_failures.load(Ordering::Relaxed),
            channels_opened: self.channels_opened.load(Ordering::Relaxed),
        }
    }
}
