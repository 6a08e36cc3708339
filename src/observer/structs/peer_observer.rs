use crate::observer::structs::observer::Observer;
use crate::peer::structs::peer_status::PeerStatus;

#[derive(Debug, Clone, Default)]
pub struct PeerObserver {
    pub peer_status: Observer<PeerStatus>,
}
