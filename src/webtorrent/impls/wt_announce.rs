use crate::common::common::to_binary_string;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer_id::PeerId;
use crate::metainfo::structs::content_id::ContentId;
use crate::webtorrent::structs::wt_announce::WtAnnounce;
use crate::webtorrent::structs::wt_offer::WtOffer;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

pub const ACTION_ANNOUNCE: &str = "announce";

impl WtAnnounce {
    pub fn from_request(request: &AnnounceRequest, offers: Vec<WtOffer>) -> WtAnnounce {
        WtAnnounce {
            action: ACTION_ANNOUNCE.to_string(),
            info_hash: to_binary_string(&request.info_hash.0),
            peer_id: to_binary_string(&request.peer_id.0),
            numwant: Some(offers.len() as u32),
            uploaded: Some(request.uploaded),
            downloaded: Some(request.downloaded),
            left: Some(request.left),
            event: request.event.as_wire().map(str::to_string),
            offers: Some(offers),
            answer: None,
            to_peer_id: None,
            offer_id: None,
        }
    }

    pub fn answer(info_hash: &ContentId, peer_id: &PeerId, to_peer_id: &PeerId, offer_id: &[u8], answer: WtSessionDescription) -> WtAnnounce {
        WtAnnounce {
            action: ACTION_ANNOUNCE.to_string(),
            info_hash: to_binary_string(&info_hash.0),
            peer_id: to_binary_string(&peer_id.0),
            numwant: None,
            uploaded: None,
            downloaded: None,
            left: None,
            event: None,
            offers: None,
            answer: Some(answer),
            to_peer_id: Some(to_binary_string(&to_peer_id.0)),
            offer_id: Some(to_binary_string(offer_id)),
        }
    }
}
