use crate::observer::structs::client_observers::ClientObservers;
use crate::observer::structs::observer::Observer;
use crate::observer::structs::observer_receivers::ObserverReceivers;
use crate::observer::structs::peer_observer::PeerObserver;
use crate::observer::structs::tracker_observer::TrackerObserver;

impl ClientObservers {
    pub fn disabled() -> ClientObservers {
        ClientObservers::default()
    }

    /// Enables every status channel, each buffered to `capacity` events.
    pub fn channels(capacity: usize) -> (ClientObservers, ObserverReceivers) {
        let (peer_status, peer_status_receiver) = Observer::new(capacity);
        let (conn_status, conn_status_receiver) = Observer::new(capacity);
        let (announce_status, announce_status_receiver) = Observer::new(capacity);
        (
            ClientObservers {
                peers: PeerObserver { peer_status },
                trackers: TrackerObserver { conn_status, announce_status },
            },
            ObserverReceivers {
                peer_status: peer_status_receiver,
                conn_status: conn_status_receiver,
                announce_status: announce_status_receiver,
            },
        )
    }
}
