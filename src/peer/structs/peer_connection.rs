use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::watch;
use crate::observer::structs::status_emitter::StatusEmitter;
use crate::peer::enums::peer_state::PeerState;
use crate::peer::structs::peer_counters_atomic::PeerCountersAtomic;
use crate::peer::structs::peer_status::PeerStatus;
use crate::torrent::structs::torrent::Torrent;
use crate::torrent::types::PieceBitfield;
use crate::tracker::structs::peer_id::PeerId;

pub struct PeerConnection {
    pub(crate) torrent: Arc<Torrent>,
    pub(crate) expected_peer_id: Option<PeerId>,
    pub(crate) remote_peer_id: Mutex<Option<PeerId>>,
    pub(crate) state: Mutex<PeerState>,
    pub(crate) remote_pieces: Mutex<PieceBitfield>,
    pub(crate) counters: PeerCountersAtomic,
    pub(crate) failures: Mutex<u32>,
    pub(crate) status: StatusEmitter<PeerStatus>,
    pub(crate) cancel: watch::Sender<bool>,
}
