use std::sync::Arc;
use webrtc::data::data_channel::PollDataChannel;
use webrtc::peer_connection::RTCPeerConnection;

pub struct WebRtcChannel {
    pub(crate) stream: PollDataChannel,
    pub(crate) peer_connection: Arc<RTCPeerConnection>,
}
