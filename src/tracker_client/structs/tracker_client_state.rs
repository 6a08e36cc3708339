use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::AbortHandle;
use tokio_tungstenite::tungstenite::Message;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker_client::enums::signaling_state::SignalingState;
use crate::tracker_client::structs::announce_slot::AnnounceSlot;
use crate::tracker_client::structs::outbound_offer::OutboundOffer;

/// A frame for the writer task; the sender learns whether it reached the socket.
pub type OutboundFrame = (Message, Option<oneshot::Sender<bool>>);

pub struct TrackerClientState {
    pub signaling: SignalingState,
    pub started: bool,
    pub closed: bool,
    pub writer: Option<mpsc::UnboundedSender<OutboundFrame>>,
    pub interval: Duration,
    pub announced: HashMap<ContentId, AnnounceSlot>,
    pub outbound_offers: HashMap<[u8; 20], OutboundOffer>,
    pub negotiations: HashMap<ContentId, Vec<AbortHandle>>,
}
