use crate::webtorrent::enums::wt_sdp_type::WtSdpType;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WtSessionDescription {
    #[serde(rename = "type")]
    pub sdp_type: WtSdpType,
    pub sdp: String,
}
