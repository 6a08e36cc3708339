use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use webrtc::peer_connection::RTCPeerConnection;
use crate::rtc::enums::negotiation_error::NegotiationError;
use crate::rtc::types::DataChannelConn;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

pub struct WebRtcOffer {
    pub(crate) peer_connection: Arc<RTCPeerConnection>,
    pub(crate) description: WtSessionDescription,
    pub(crate) opened: Option<oneshot::Receiver<Result<DataChannelConn, NegotiationError>>>,
    pub(crate) open_timeout: Duration,
    pub(crate) answered: bool,
}
