use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use ahash::AHashMap;
use parking_lot::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::metainfo::structs::content_id::ContentId;
use crate::observer::structs::client_observers::ClientObservers;
use crate::torrent::structs::torrent::Torrent;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker_pool::structs::tracker_client_pool::TrackerClientPool;

pub struct Client {
    pub(crate) config: Arc<Configuration>,
    pub(crate) peer_id: PeerId,
    pub(crate) pool: Arc<TrackerClientPool>,
    pub(crate) observers: ClientObservers,
    pub(crate) torrents: Arc<Mutex<AHashMap<ContentId, Arc<Torrent>>>>,
    pub(crate) closed: AtomicBool,
}
