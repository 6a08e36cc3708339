use std::sync::Arc;
use crate::peer::enums::peer_error::PeerError;
use crate::tracker::structs::peer_id::PeerId;

/// `ok: true` when a session is established, `ok: false` when it ends.
#[derive(Debug, Clone)]
pub struct PeerStatus {
    pub ok: bool,
    pub err: Option<Arc<PeerError>>,
    pub peer_id: Option<PeerId>,
}
