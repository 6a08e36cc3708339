use ahash::AHashMap;
use parking_lot::Mutex;
use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
use crate::tracker_pool::structs::pool_entry::PoolEntry;

pub struct TrackerClientPool {
    pub(crate) settings: TrackerClientSettings,
    pub(crate) clients: Mutex<AHashMap<String, PoolEntry>>,
}
