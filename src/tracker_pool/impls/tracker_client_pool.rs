use std::sync::Arc;
use ahash::AHashMap;
use log::{debug, error};
use parking_lot::Mutex;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker_client::structs::tracker_client::TrackerClient;
use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
use crate::tracker_pool::enums::pool_error::PoolError;
use crate::tracker_pool::structs::pool_entry::PoolEntry;
use crate::tracker_pool::structs::tracker_client_lease::TrackerClientLease;
use crate::tracker_pool::structs::tracker_client_pool::TrackerClientPool;

impl TrackerClientPool {
    pub fn new(settings: TrackerClientSettings) -> TrackerClientPool {
        TrackerClientPool {
            settings,
            clients: Mutex::new(AHashMap::new()),
        }
    }

    /// Returns the client for `url`, creating and starting it when absent.
    pub fn get(self: &Arc<Self>, url: &str, info_hash: ContentId) -> TrackerClientLease {
        let (client, created) = {
            let mut clients = self.clients.lock();
            match clients.get_mut(url) {
                Some(entry) => {
                    entry.ref_count += 1;
                    (entry.client.clone(), false)
                }
                None => {
                    let client = Arc::new(TrackerClient::new(url, self.settings.clone()));
                    clients.insert(url.to_string(), PoolEntry {
                        client: client.clone(),
                        ref_count: 1,
                    });
                    (client, true)
                }
            }
        };

        if created {
            debug!("[TRACKER POOL] Created tracker client for {}", url);
            let failed_url = url.to_string();
            client.start(move |error| {
                if let Some(error) = error {
                    error!("[TRACKER POOL] error running tracker client for {:?}: {}", failed_url, error);
                }
            });
        }

        TrackerClientLease {
            pool: self.clone(),
            client,
            url: url.to_string(),
            info_hash,
            released: false,
        }
    }

    pub(crate) fn release_client(&self, url: &str, client: &Arc<TrackerClient>, info_hash: &ContentId) -> Result<(), PoolError> {
        client.close_offers_for_infohash(info_hash);

        let closing = {
            let mut clients = self.clients.lock();
            match clients.get_mut(url) {
                Some(entry) if Arc::ptr_eq(&entry.client, client) && entry.ref_count > 0 => {
                    entry.ref_count -= 1;
                    if entry.ref_count == 0 {
                        clients.remove(url).map(|entry| entry.client)
                    } else {
                        None
                    }
                }
                _ => {
                    error!("[TRACKER POOL] Unbalanced release of tracker client for {}", url);
                    return Err(PoolError::UnbalancedRelease { url: url.to_string() });
                }
            }
        };

        if let Some(client) = closing {
            debug!("[TRACKER POOL] Closing tracker client for {}", url);
            client.close();
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.clients.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.lock().is_empty()
    }

    pub fn ref_count(&self, url: &str) -> usize {
        self.clients.lock().get(url).map(|entry| entry.ref_count).unwrap_or(0)
    }

    pub fn client(&self, url: &str) -> Option<Arc<TrackerClient>> {
        self.clients.lock().get(url).map(|entry| entry.client.clone())
    }

    pub fn status_lines(&self) -> Vec<String> {
        let clients: Vec<Arc<TrackerClient>> = self.clients.lock().values().map(|entry| entry.client.clone()).collect();
        clients.iter().map(|client| client.status_line()).collect()
    }
}
