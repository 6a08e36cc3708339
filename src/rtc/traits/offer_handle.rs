use async_trait::async_trait;
use crate::rtc::enums::negotiation_error::NegotiationError;
use crate::rtc::types::DataChannelConn;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

#[async_trait]
pub trait OfferHandle: Send {
    fn description(&self) -> &WtSessionDescription;

    async fn accept_answer(self: Box<Self>, answer: WtSessionDescription) -> Result<DataChannelConn, NegotiationError>;
}
