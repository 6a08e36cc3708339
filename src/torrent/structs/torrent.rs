use std::sync::{Arc, Weak};
use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use crate::metainfo::structs::content_id::ContentId;
use crate::metainfo::structs::piece_set::PieceSet;
use crate::observer::structs::peer_observer::PeerObserver;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::torrent::structs::torrent_state::TorrentState;
use crate::torrent::structs::torrent_stats_atomic::TorrentStatsAtomic;
use crate::torrent::traits::piece_storage::PieceStorage;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker_pool::structs::tracker_client_lease::TrackerClientLease;

pub struct Torrent {
    pub(crate) info_hash: ContentId,
    pub(crate) peer_id: PeerId,
    pub(crate) piece_set: Arc<PieceSet>,
    pub(crate) storage: Arc<dyn PieceStorage>,
    pub(crate) chunk_size: u32,
    pub(crate) state: Mutex<TorrentState>,
    pub(crate) stats: TorrentStatsAtomic,
    pub(crate) have: broadcast::Sender<u32>,
    pub(crate) complete: watch::Sender<bool>,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) peer_observer: PeerObserver,
    pub(crate) peers: Mutex<Vec<Weak<PeerConnection>>>,
    pub(crate) leases: Mutex<Vec<TrackerClientLease>>,
}
