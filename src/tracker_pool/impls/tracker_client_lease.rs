use std::sync::Arc;
use log::warn;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker_client::structs::tracker_client::TrackerClient;
use crate::tracker_pool::enums::pool_error::PoolError;
use crate::tracker_pool::structs::tracker_client_lease::TrackerClientLease;

impl TrackerClientLease {
    pub fn client(&self) -> &Arc<TrackerClient> {
        &self.client
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn info_hash(&self) -> ContentId {
        self.info_hash
    }

    pub fn announce(&self, event: AnnounceEvent) {
        self.client.announce(event, self.info_hash);
    }

    /// Drops this content id's offers and negotiations, then the reference.
    pub fn release(mut self) -> Result<(), PoolError> {
        self.released = true;
        self.pool.release_client(&self.url, &self.client, &self.info_hash)
    }
}

impl Drop for TrackerClientLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        warn!("[TRACKER POOL] Lease for {} ({}) dropped without release", self.url, self.info_hash);
        let _ = self.pool.release_client(&self.url, &self.client, &self.info_hash);
    }
}
