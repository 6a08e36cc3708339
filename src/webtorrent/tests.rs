#[cfg(test)]
mod webtorrent_tests {
    use crate::common::common::{from_binary_string_fixed, to_binary_string};
    use crate::metainfo::structs::content_id::ContentId;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::announce_request::AnnounceRequest;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::webtorrent::enums::wt_message_type::WtMessageType;
    use crate::webtorrent::structs::wt_announce::WtAnnounce;
    use crate::webtorrent::structs::wt_offer::WtOffer;
    use crate::webtorrent::structs::wt_session_description::WtSessionDescription;
    use crate::webtorrent::webtorrent::{decode_response, encode_announce, generate_offer_id};

    #[test]
    fn test_announce_encoding_shape() {
        let request = AnnounceRequest::new(AnnounceEvent::Started, ContentId([0xff; 20]), PeerId([0x41; 20]), 10);
        let offer_id = [0x80u8; 20];
        let announce = WtAnnounce::from_request(&request, vec![WtOffer {
            offer_id: to_binary_string(&offer_id),
            offer: WtSessionDescription::offer("v=0".to_string()),
        }]);
        let json: serde_json::Value = serde_json::from_str(&encode_announce(&announce).unwrap()).unwrap();
        assert_eq!(json["action"], "announce");
        assert_eq!(json["event"], "started");
        assert_eq!(json["numwant"], 1);
        assert_eq!(json["left"], 10);
        assert_eq!(json["offers"][0]["offer"]["type"], "offer");
        assert_eq!(json["offers"][0]["offer"]["sdp"], "v=0");
        assert!(json.get("answer").is_none());
        let info_hash = json["info_hash"].as_str().unwrap();
        assert_eq!(info_hash.chars().count(), 20);
        assert_eq!(from_binary_string_fixed::<20>(info_hash), Some([0xff; 20]));
    }

    #[test]
    fn test_answer_encoding_shape() {
        let answer = WtAnnounce::answer(
            &ContentId([1; 20]),
            &PeerId([2; 20]),
            &PeerId([3; 20]),
            &[4; 20],
            WtSessionDescription::answer("v=0".to_string()),
        );
        let json: serde_json::Value = serde_json::from_str(&encode_announce(&answer).unwrap()).unwrap();
        assert_eq!(json["answer"]["type"], "answer");
        assert!(json.get("offers").is_none());
        assert!(json.get("event").is_none());
        assert_eq!(from_binary_string_fixed::<20>(json["to_peer_id"].as_str().unwrap()), Some([3; 20]));
    }

    #[test]
    fn test_response_classification() {
        let info_hash = to_binary_string(&[9u8; 20]);
        let peer = to_binary_string(&[8u8; 20]);
        let ack = format!(r#"{{"action":"announce","info_hash":{},"interval":60,"complete":1,"incomplete":2}}"#, serde_json::to_string(&info_hash).unwrap());
        let response = decode_response(&ack).unwrap();
        assert_eq!(response.message_type(), WtMessageType::AnnounceAck);
        assert_eq!(response.interval, Some(60));
        assert_eq!(response.content_id(), Some(ContentId([9; 20])));

        let offer = serde_json::json!({
            "action": "announce",
            "info_hash": info_hash,
            "peer_id": peer,
            "offer_id": to_binary_string(&[7u8; 20]),
            "offer": {"type": "offer", "sdp": "v=0"}
        }).to_string();
        let response = decode_response(&offer).unwrap();
        assert_eq!(response.message_type(), WtMessageType::Offer);
        assert_eq!(response.remote_peer_id(), Some(PeerId([8; 20])));
        assert_eq!(response.offer_id_bytes(), Some([7; 20]));

        let failure = decode_response(r#"{"failure reason":"unregistered torrent"}"#).unwrap();
        assert_eq!(failure.message_type(), WtMessageType::Failure);
        assert_eq!(failure.failure_reason.as_deref(), Some("unregistered torrent"));

        let scrape = decode_response(r#"{"action":"scrape","files":{}}"#).unwrap();
        assert_eq!(scrape.message_type(), WtMessageType::Unknown);
    }

    #[test]
    fn test_offer_ids_are_random() {
        assert_ne!(generate_offer_id(), generate_offer_id());
    }
}
