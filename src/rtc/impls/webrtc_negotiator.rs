use std::sync::{Arc, Weak};
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use webrtc::api::APIBuilder;
use webrtc::api::setting_engine::SettingEngine;
use webrtc::data_channel::RTCDataChannel;
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use crate::config::structs::rtc_config::RtcConfig;
use crate::rtc::enums::negotiation_error::NegotiationError;
use crate::rtc::structs::webrtc_channel::WebRtcChannel;
use crate::rtc::structs::webrtc_negotiator::WebRtcNegotiator;
use crate::rtc::structs::webrtc_offer::WebRtcOffer;
use crate::rtc::traits::negotiator::Negotiator;
use crate::rtc::traits::offer_handle::OfferHandle;
use crate::rtc::types::{DataChannelConn, PendingChannel};
use crate::webtorrent::enums::wt_sdp_type::WtSdpType;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

pub const DATA_CHANNEL_LABEL: &str = "webrtc-datachannel";
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(30);

type OpenSender = oneshot::Sender<Result<DataChannelConn, NegotiationError>>;
type OpenReceiver = oneshot::Receiver<Result<DataChannelConn, NegotiationError>>;

impl WebRtcNegotiator {
    pub fn new(config: &RtcConfig) -> WebRtcNegotiator {
        let mut setting_engine = SettingEngine::default();
        setting_engine.detach_data_channels();
        let api = APIBuilder::new()
            .with_setting_engine(setting_engine)
            .build();

        let configuration = RTCConfiguration {
            ice_servers: config.ice_servers.iter().map(|server| RTCIceServer {
                urls: server.urls.clone(),
                username: server.username.clone(),
                credential: server.credential.clone(),
                ..Default::default()
            }).collect(),
            ..Default::default()
        };

        WebRtcNegotiator {
            api: Arc::new(api),
            configuration,
            open_timeout: DEFAULT_OPEN_TIMEOUT,
        }
    }

    pub fn with_open_timeout(mut self, open_timeout: Duration) -> WebRtcNegotiator {
        self.open_timeout = open_timeout;
        self
    }

    async fn new_peer_connection(&self) -> Result<Arc<RTCPeerConnection>, NegotiationError> {
        Ok(Arc::new(self.api.new_peer_connection(self.configuration.clone()).await?))
    }
}

/// Detaches `data_channel` once it opens and reports the stream on `opened`.
pub(crate) fn watch_open(data_channel: &Arc<RTCDataChannel>, peer_connection: Weak<RTCPeerConnection>, opened: OpenSender) {
    let channel = Arc::downgrade(data_channel);
    data_channel.on_open(Box::new(move || {
        Box::pin(async move {
            let (Some(channel), Some(peer_connection)) = (channel.upgrade(), peer_connection.upgrade()) else {
                let _ = opened.send(Err(NegotiationError::ChannelClosed));
                return;
            };
            let result = match channel.detach().await {
                Ok(raw) => Ok(Box::new(WebRtcChannel::new(raw, peer_connection)) as DataChannelConn),
                Err(error) => Err(NegotiationError::from(error)),
            };
            let _ = opened.send(result);
        })
    }));
}

/// Waits for the channel to open; closes the peer connection on failure.
pub(crate) async fn wait_open(peer_connection: Arc<RTCPeerConnection>, opened: OpenReceiver, open_timeout: Duration) -> Result<DataChannelConn, NegotiationError> {
    let result = match tokio::time::timeout(open_timeout, opened).await {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => Err(NegotiationError::ChannelClosed),
        Err(_) => Err(NegotiationError::Timeout(open_timeout)),
    };
    if result.is_err() {
        let _ = peer_connection.close().await;
    }
    result
}

/// Applies `description` locally and returns the SDP once ICE gathering completes.
async fn gather_local_description(peer_connection: &RTCPeerConnection, description: RTCSessionDescription) -> Result<String, NegotiationError> {
    let mut gathering_complete = peer_connection.gathering_complete_promise().await;
    peer_connection.set_local_description(description).await?;
    let _ = gathering_complete.recv().await;
    peer_connection.local_description().await
        .map(|description| description.sdp)
        .ok_or_else(|| NegotiationError::InvalidDescription(String::from("no local description after gathering")))
}

#[async_trait]
impl Negotiator for WebRtcNegotiator {
    async fn create_offer(&self) -> Result<Box<dyn OfferHandle>, NegotiationError> {
        let peer_connection = self.new_peer_connection().await?;
        let result = async {
            let data_channel = peer_connection.create_data_channel(DATA_CHANNEL_LABEL, None).await?;
            let (opened_sender, opened) = oneshot::channel();
            watch_open(&data_channel, Arc::downgrade(&peer_connection), opened_sender);
            let offer = peer_connection.create_offer(None).await?;
            let sdp = gather_local_description(&peer_connection, offer).await?;
            Ok::<_, NegotiationError>((sdp, opened))
        }.await;

        match result {
            Ok((sdp, opened)) => {
                debug!("[RTC] Created offer ({} bytes of SDP)", sdp.len());
                Ok(Box::new(WebRtcOffer {
                    peer_connection,
                    description: WtSessionDescription::offer(sdp),
                    opened: Some(opened),
                    open_timeout: self.open_timeout,
                    answered: false,
                }))
            }
            Err(error) => {
                let _ = peer_connection.close().await;
                Err(error)
            }
        }
    }

    async fn accept_offer(&self, offer: WtSessionDescription) -> Result<(WtSessionDescription, PendingChannel), NegotiationError> {
        if offer.sdp_type != WtSdpType::Offer {
            return Err(NegotiationError::InvalidDescription(String::from("expected an offer")));
        }
        let peer_connection = self.new_peer_connection().await?;
        let (opened_sender, opened) = oneshot::channel();
        let opened_sender = Arc::new(Mutex::new(Some(opened_sender)));
        let weak_peer_connection = Arc::downgrade(&peer_connection);
        peer_connection.on_data_channel(Box::new(move |data_channel: Arc<RTCDataChannel>| {
            let sender = opened_sender.lock().take();
            let peer_connection = weak_peer_connection.clone();
            Box::pin(async move {
                if let Some(sender) = sender {
                    watch_open(&data_channel, peer_connection, sender);
                }
            })
        }));

        let result = async {
            peer_connection.set_remote_description(RTCSessionDescription::offer(offer.sdp)?).await?;
            let answer = peer_connection.create_answer(None).await?;
            gather_local_description(&peer_connection, answer).await
        }.await;

        match result {
            Ok(sdp) => {
                let pending: PendingChannel = Box::pin(wait_open(peer_connection, opened, self.open_timeout));
                Ok((WtSessionDescription::answer(sdp), pending))
            }
            Err(error) => {
                let _ = peer_connection.close().await;
                Err(error)
            }
        }
    }
}
