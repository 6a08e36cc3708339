use crate::webtorrent::structs::wt_session_description::WtSessionDescription;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WtOffer {
    pub offer_id: String,
    pub offer: WtSessionDescription,
}
