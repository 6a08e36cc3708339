use std::sync::Arc;
use crate::tracker_client::structs::tracker_client::TrackerClient;

pub struct PoolEntry {
    pub client: Arc<TrackerClient>,
    pub ref_count: usize,
}
