use std::sync::Arc;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_status::PeerStatus;
use crate::tracker::structs::peer_id::PeerId;

impl PeerStatus {
    pub fn established(peer_id: Option<PeerId>) -> PeerStatus {
        PeerStatus { ok: true, err: None, peer_id }
    }

    pub fn dropped(peer_id: Option<PeerId>, err: Option<Arc<PeerError>>) -> PeerStatus {
        PeerStatus { ok: false, err, peer_id }
    }
}
