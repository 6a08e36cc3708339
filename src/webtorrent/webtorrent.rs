use rand::RngExt;
use crate::webtorrent::structs::wt_announce::WtAnnounce;
use crate::webtorrent::structs::wt_announce_response::WtAnnounceResponse;

pub fn generate_offer_id() -> [u8; 20] {
    let mut rng = rand::rng();
    rng.random()
}

pub fn encode_announce(announce: &WtAnnounce) -> Result<String, serde_json::Error> {
    serde_json::to_string(announce)
}

pub fn decode_response(text: &str) -> Result<WtAnnounceResponse, serde_json::Error> {
    serde_json::from_str(text)
}
