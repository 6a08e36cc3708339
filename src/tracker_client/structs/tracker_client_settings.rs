use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use crate::observer::structs::tracker_observer::TrackerObserver;
use crate::rtc::traits::negotiator::Negotiator;
use crate::rtc::types::OnConn;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::types::AnnounceRequestFactory;
use crate::tracker_client::traits::dialer::Dialer;

#[derive(Clone)]
pub struct TrackerClientSettings {
    pub peer_id: PeerId,
    pub negotiator: Arc<dyn Negotiator>,
    pub dialer: Arc<dyn Dialer>,
    pub http_headers: BTreeMap<String, String>,
    pub request_factory: AnnounceRequestFactory,
    pub on_conn: OnConn,
    pub observer: TrackerObserver,
    pub handshake_timeout: Duration,
    pub announce_interval: Duration,
    pub offers_per_announce: u32,
}
