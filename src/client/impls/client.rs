use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use ahash::AHashMap;
use log::{debug, info};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncWrite};
use crate::client::enums::client_error::ClientError;
use crate::client::structs::client::Client;
use crate::common::structs::custom_error::CustomError;
use crate::config::impls::configuration::MAX_CHUNK_SIZE;
use crate::config::structs::configuration::Configuration;
use crate::metainfo::structs::content_id::ContentId;
use crate::observer::structs::client_observers::ClientObservers;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::rtc::structs::data_channel_context::DataChannelContext;
use crate::rtc::structs::webrtc_negotiator::WebRtcNegotiator;
use crate::rtc::traits::negotiator::Negotiator;
use crate::rtc::types::{DataChannelConn, OnConn};
use crate::torrent::structs::torrent::Torrent;
use crate::torrent::structs::torrent_spec::TorrentSpec;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::types::AnnounceRequestFactory;
use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
use crate::tracker_client::traits::dialer::Dialer;
use crate::tracker_pool::structs::tracker_client_pool::TrackerClientPool;

type TorrentMap = Mutex<AHashMap<ContentId, Arc<Torrent>>>;

impl Client {
    /// Client negotiating over WebRTC with the configured ICE servers.
    pub fn new(config: Arc<Configuration>, observers: ClientObservers) -> Client {
        let negotiator = Arc::new(WebRtcNegotiator::new(&config.rtc));
        Self::with_negotiator(config, observers, negotiator, None)
    }

    /// Client with a custom negotiation backend and, optionally, a custom dialer.
    pub fn with_negotiator(
        config: Arc<Configuration>,
        observers: ClientObservers,
        negotiator: Arc<dyn Negotiator>,
        dialer: Option<Arc<dyn Dialer>>,
    ) -> Client {
        let peer_id = PeerId::generate(&config.peer_id_prefix);
        let torrents: Arc<TorrentMap> = Arc::new(Mutex::new(AHashMap::new()));

        let mut settings = TrackerClientSettings::from_config(
            &config,
            peer_id,
            negotiator,
            request_factory(Arc::downgrade(&torrents)),
            connection_callback(Arc::downgrade(&torrents)),
            observers.trackers.clone(),
        );
        if let Some(dialer) = dialer {
            settings = settings.with_dialer(dialer);
        }

        info!("[CLIENT] Peer id {} ({})", peer_id, config.peer_id_prefix);
        Client {
            config,
            peer_id,
            pool: Arc::new(TrackerClientPool::new(settings)),
            observers,
            torrents,
            closed: AtomicBool::new(false),
        }
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn config(&self) -> &Arc<Configuration> {
        &self.config
    }

    pub fn pool(&self) -> &Arc<TrackerClientPool> {
        &self.pool
    }

    /// Registers a torrent, hashes what its storage already holds and
    /// announces it on every tracker the `TorrentSpec` lists.
    pub async fn add_torrent(&self, spec: TorrentSpec) -> Result<Arc<Torrent>, ClientError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ClientError::Closed);
        }
        let info_hash = spec.info_hash;
        if self.torrents.lock().contains_key(&info_hash) {
            return Err(ClientError::DuplicateTorrent(info_hash));
        }

        let chunk_size = self.config.peer.chunk_size;
        if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
            return Err(ClientError::InvalidChunkSize(chunk_size));
        }
        let torrent = Arc::new(Torrent::new(
            info_hash,
            self.peer_id,
            spec.piece_set,
            spec.storage,
            chunk_size,
            self.observers.peers.clone(),
        )?);
        torrent.verify_existing().await?;

        {
            let mut torrents = self.torrents.lock();
            if torrents.contains_key(&info_hash) {
                return Err(ClientError::DuplicateTorrent(info_hash));
            }
            torrents.insert(info_hash, torrent.clone());
        }

        if self.config.disable_trackers {
            debug!("[CLIENT] Trackers disabled, {} not announced", info_hash);
        } else {
            for url in &spec.trackers {
                let lease = self.pool.get(url, info_hash);
                lease.announce(AnnounceEvent::Started);
                torrent.attach_lease(lease);
            }
        }
        info!("[CLIENT] Added torrent {} ({} trackers)", info_hash, spec.trackers.len());
        Ok(torrent)
    }

    pub fn torrent(&self, info_hash: &ContentId) -> Option<Arc<Torrent>> {
        self.torrents.lock().get(info_hash).cloned()
    }

    pub fn torrents(&self) -> Vec<Arc<Torrent>> {
        self.torrents.lock().values().cloned().collect()
    }

    /// Starts a peer session for `info_hash` over an already connected stream.
    pub fn add_peer_conn<IO>(&self, info_hash: &ContentId, io: IO, expected_peer_id: Option<PeerId>) -> Result<Arc<PeerConnection>, ClientError>
    where
        IO: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let torrent = self.torrent(info_hash).ok_or(ClientError::UnknownTorrent(*info_hash))?;
        Ok(torrent.add_peer_conn(io, expected_peer_id))
    }

    /// Closes the torrent, its peer connections and its tracker leases.
    pub fn drop_torrent(&self, info_hash: &ContentId) -> bool {
        let Some(torrent) = self.torrents.lock().remove(info_hash) else {
            return false;
        };
        torrent.close();
        true
    }

    pub fn status_lines(&self) -> Vec<String> {
        self.pool.status_lines()
    }

    /// Drops every torrent. Idempotent.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let torrents: Vec<Arc<Torrent>> = self.torrents.lock().drain().map(|(_, torrent)| torrent).collect();
        for torrent in torrents {
            torrent.close();
        }
        info!("[CLIENT] Closed");
    }
}

pub(crate) fn request_factory(torrents: Weak<TorrentMap>) -> AnnounceRequestFactory {
    Arc::new(move |event: AnnounceEvent, info_hash: ContentId| -> Result<AnnounceRequest, CustomError> {
        let torrents = torrents.upgrade().ok_or_else(|| CustomError::new("client closed"))?;
        let torrent = torrents.lock().get(&info_hash).cloned()
            .ok_or_else(|| CustomError::new(&format!("unknown torrent {info_hash}")))?;
        Ok(torrent.announce_request(event))
    })
}

pub(crate) fn connection_callback(torrents: Weak<TorrentMap>) -> OnConn {
    Arc::new(move |conn: DataChannelConn, context: DataChannelContext| {
        let torrent = torrents.upgrade().and_then(|torrents| torrents.lock().get(&context.info_hash).cloned());
        match torrent {
            Some(torrent) => {
                debug!("[CLIENT] Data channel for {} from {} via {}", context.info_hash, context.remote_peer_id, context.tracker_url);
                torrent.add_peer_conn(conn, Some(context.remote_peer_id));
            }
            None => debug!("[CLIENT] Data channel for unknown torrent {} dropped", context.info_hash),
        }
    })
}
