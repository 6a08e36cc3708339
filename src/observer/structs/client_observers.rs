use crate::observer::structs::peer_observer::PeerObserver;
use crate::observer::structs::tracker_observer::TrackerObserver;

#[derive(Debug, Clone, Default)]
pub struct ClientObservers {
    pub peers: PeerObserver,
    pub trackers: TrackerObserver,
}
