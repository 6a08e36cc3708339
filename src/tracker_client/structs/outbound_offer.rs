use crate::metainfo::structs::content_id::ContentId;
use crate::rtc::traits::offer_handle::OfferHandle;

pub struct OutboundOffer {
    pub info_hash: ContentId,
    pub handle: Box<dyn OfferHandle>,
}
