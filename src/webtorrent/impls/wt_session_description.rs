use crate::webtorrent::enums::wt_sdp_type::WtSdpType;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

impl WtSessionDescription {
    pub fn offer(sdp: String) -> WtSessionDescription {
        WtSessionDescription { sdp_type: WtSdpType::Offer, sdp }
    }

    pub fn answer(sdp: String) -> WtSessionDescription {
        WtSessionDescription { sdp_type: WtSdpType::Answer, sdp }
    }
}
