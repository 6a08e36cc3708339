use crate::webtorrent::structs::wt_offer::WtOffer;
use crate::webtorrent::structs::wt_session_description::WtSessionDescription;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WtAnnounce {
    pub action: String,
    pub info_hash: String,
    pub peer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numwant: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloaded: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<WtOffer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<WtSessionDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_peer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
}
