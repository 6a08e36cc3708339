#[cfg(test)]
mod rtc_tests {
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::rtc_config::RtcConfig;
    use crate::peer::enums::peer_message::PeerMessage;
    use crate::peer::peer::{read_message, write_message};
    use crate::rtc::enums::negotiation_error::NegotiationError;
    use crate::rtc::structs::webrtc_negotiator::WebRtcNegotiator;
    use crate::rtc::traits::negotiator::Negotiator;
    use crate::webtorrent::enums::wt_sdp_type::WtSdpType;
    use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

    #[test]
    fn test_negotiator_takes_ice_servers_from_config() {
        let config = Configuration::init();
        let negotiator = WebRtcNegotiator::new(&config.rtc);
        assert_eq!(negotiator.configuration.ice_servers.len(), 1);
        assert_eq!(negotiator.configuration.ice_servers[0].urls, vec!["stun:stun.l.google.com:19302".to_string()]);
    }

    #[tokio::test]
    async fn test_accept_offer_rejects_answer_description() {
        let negotiator = WebRtcNegotiator::new(&RtcConfig::default());
        let result = negotiator.accept_offer(WtSessionDescription::answer("v=0".to_string())).await;
        assert!(matches!(result, Err(NegotiationError::InvalidDescription(_))));
    }

    #[tokio::test]
    async fn test_create_offer_produces_offer_sdp() {
        let negotiator = WebRtcNegotiator::new(&RtcConfig::default());
        let offer = negotiator.create_offer().await.unwrap();
        assert_eq!(offer.description().sdp_type, WtSdpType::Offer);
        assert!(offer.description().sdp.starts_with("v=0"));
    }

    #[tokio::test]
    async fn test_direct_negotiation_carries_piece_messages() {
        let offering = WebRtcNegotiator::new(&RtcConfig::default()).with_open_timeout(Duration::from_secs(10));
        let answering = WebRtcNegotiator::new(&RtcConfig::default()).with_open_timeout(Duration::from_secs(10));

        let offer = offering.create_offer().await.unwrap();
        let (answer, pending) = answering.accept_offer(offer.description().clone()).await.unwrap();
        let (local, remote) = tokio::join!(offer.accept_answer(answer), pending);
        let (mut local, mut remote) = (local.unwrap(), remote.unwrap());

        local.write_all(b"ping").await.unwrap();
        let mut buffer = [0u8; 4];
        remote.read_exact(&mut buffer).await.unwrap();
        assert_eq!(&buffer, b"ping");

        for length in [16384usize, 65536, 262144] {
            let block: Vec<u8> = (0..length).map(|i| (i % 251) as u8).collect();
            let message = PeerMessage::Piece { index: 2, begin: 0, block };
            write_message(&mut local, &message).await.unwrap();
            let received = tokio::time::timeout(Duration::from_secs(10), read_message(&mut remote))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(received, Some(message));
        }
    }
}
