use async_trait::async_trait;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use crate::rtc::enums::negotiation_error::NegotiationError;
use crate::rtc::impls::webrtc_negotiator::wait_open;
use crate::rtc::structs::webrtc_offer::WebRtcOffer;
use crate::rtc::traits::offer_handle::OfferHandle;
use crate::rtc::types::DataChannelConn;
use crate::webtorrent::enums::wt_sdp_type::WtSdpType;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

#[async_trait]
impl OfferHandle for WebRtcOffer {
    fn description(&self) -> &WtSessionDescription {
        &self.description
    }

    async fn accept_answer(mut self: Box<Self>, answer: WtSessionDescription) -> Result<DataChannelConn, NegotiationError> {
        self.answered = true;
        let peer_connection = self.peer_connection.clone();
        let opened = self.opened.take().ok_or(NegotiationError::ChannelClosed)?;
        if answer.sdp_type != WtSdpType::Answer {
            let _ = peer_connection.close().await;
            return Err(NegotiationError::InvalidDescription(String::from("expected an answer")));
        }
        let applied = async {
            peer_connection.set_remote_description(RTCSessionDescription::answer(answer.sdp)?).await?;
            Ok::<_, NegotiationError>(())
        }.await;
        if let Err(error) = applied {
            let _ = peer_connection.close().await;
            return Err(error);
        }
        wait_open(peer_connection, opened, self.open_timeout).await
    }
}

impl Drop for WebRtcOffer {
    fn drop(&mut self) {
        if self.answered {
            return;
        }
        let peer_connection = self.peer_connection.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = peer_connection.close().await;
            });
        }
    }
}
