use async_trait::async_trait;
use crate::rtc::enums::negotiation_error::NegotiationError;
use crate::rtc::traits::offer_handle::OfferHandle;
use crate::rtc::types::PendingChannel;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

#[async_trait]
pub trait Negotiator: Send + Sync {
    /// Creates a local offer. The returned handle completes the exchange once
    /// the remote answer arrives.
    async fn create_offer(&self) -> Result<Box<dyn OfferHandle>, NegotiationError>;

    /// Answers a remote offer. The answer must be relayed back; the pending
    /// channel resolves when the data channel opens.
    async fn accept_offer(&self, offer: WtSessionDescription) -> Result<(WtSessionDescription, PendingChannel), NegotiationError>;
}
