use std::sync::Arc;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker_client::structs::tracker_client::TrackerClient;
use crate::tracker_pool::structs::tracker_client_pool::TrackerClientPool;

#[must_use = "a lease must be released"]
pub struct TrackerClientLease {
    pub(crate) pool: Arc<TrackerClientPool>,
    pub(crate) client: Arc<TrackerClient>,
    pub(crate) url: String,
    pub(crate) info_hash: ContentId,
    pub(crate) released: bool,
}
