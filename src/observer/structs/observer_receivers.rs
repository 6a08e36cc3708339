use tokio::sync::mpsc;
use crate::peer::structs::peer_status::PeerStatus;
use crate::tracker_client::structs::tracker_status::TrackerStatus;

#[derive(Debug)]
pub struct ObserverReceivers {
    pub peer_status: mpsc::Receiver<PeerStatus>,
    pub conn_status: mpsc::Receiver<TrackerStatus>,
    pub announce_status: mpsc::Receiver<TrackerStatus>,
}
