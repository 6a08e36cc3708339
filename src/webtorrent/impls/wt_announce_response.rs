use crate::common::common::from_binary_string_fixed;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::structs::peer_id::PeerId;
use crate::webtorrent::enums::wt_message_type::WtMessageType;
use crate::webtorrent::structs::wt_announce_response::WtAnnounceResponse;

impl WtAnnounceResponse {
    pub fn message_type(&self) -> WtMessageType {
        if self.failure_reason.is_some() {
            return WtMessageType::Failure;
        }
        if self.action.as_deref().is_some_and(|action| action != "announce") {
            return WtMessageType::Unknown;
        }
        match (&self.offer, &self.answer) {
            (Some(_), _) if self.offer_id.is_some() && self.peer_id.is_some() => WtMessageType::Offer,
            (_, Some(_)) if self.offer_id.is_some() && self.peer_id.is_some() => WtMessageType::Answer,
            (None, None) if self.info_hash.is_some() => WtMessageType::AnnounceAck,
            _ => WtMessageType::Unknown,
        }
    }

    pub fn content_id(&self) -> Option<ContentId> {
        self.info_hash.as_deref().and_then(from_binary_string_fixed::<20>).map(ContentId)
    }

    pub fn remote_peer_id(&self) -> Option<PeerId> {
        self.peer_id.as_deref().and_then(from_binary_string_fixed::<20>).map(PeerId)
    }

    pub fn offer_id_bytes(&self) -> Option<[u8; 20]> {
        self.offer_id.as_deref().and_then(from_binary_string_fixed::<20>)
    }
}
