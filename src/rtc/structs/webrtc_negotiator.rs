use std::sync::Arc;
use std::time::Duration;
use webrtc::api::API;
use webrtc::peer_connection::configuration::RTCConfiguration;

pub struct WebRtcNegotiator {
    pub(crate) api: Arc<API>,
    pub(crate) configuration: RTCConfiguration,
    pub(crate) open_timeout: Duration,
}
