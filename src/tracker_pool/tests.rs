#[cfg(test)]
mod tracker_pool_tests {
    use std::collections::BTreeMap;
    use std::io;
    use std::sync::Arc;
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::common::structs::custom_error::CustomError;
    use crate::metainfo::structs::content_id::ContentId;
    use crate::observer::structs::tracker_observer::TrackerObserver;
    use crate::rtc::enums::negotiation_error::NegotiationError;
    use crate::rtc::structs::data_channel_context::DataChannelContext;
    use crate::rtc::traits::negotiator::Negotiator;
    use crate::rtc::traits::offer_handle::OfferHandle;
    use crate::rtc::types::{DataChannelConn, PendingChannel};
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::announce_request::AnnounceRequest;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
    use crate::tracker_client::traits::dialer::MockDialer;
    use crate::tracker_pool::enums::pool_error::PoolError;
    use crate::tracker_pool::structs::tracker_client_pool::TrackerClientPool;
    use crate::webtorrent::structs::wt_session_description::WtSessionDescription;

    const URL: &str = "ws://127.0.0.1:1";

    struct RefusingNegotiator;

    #[async_trait]
    impl Negotiator for RefusingNegotiator {
        async fn create_offer(&self) -> Result<Box<dyn OfferHandle>, NegotiationError> {
            Err(NegotiationError::ChannelClosed)
        }

        async fn accept_offer(&self, _offer: WtSessionDescription) -> Result<(WtSessionDescription, PendingChannel), NegotiationError> {
            Err(NegotiationError::ChannelClosed)
        }
    }

    fn pool() -> Arc<TrackerClientPool> {
        let mut dialer = MockDialer::new();
        dialer.expect_dial()
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::ConnectionRefused)));
        let peer_id = PeerId::generate("-RS0300-");
        Arc::new(TrackerClientPool::new(TrackerClientSettings {
            peer_id,
            negotiator: Arc::new(RefusingNegotiator),
            dialer: Arc::new(dialer),
            http_headers: BTreeMap::new(),
            request_factory: Arc::new(move |event: AnnounceEvent, info_hash: ContentId| -> Result<AnnounceRequest, CustomError> {
                Ok(AnnounceRequest::new(event, info_hash, peer_id, 0))
            }),
            on_conn: Arc::new(|_: DataChannelConn, _: DataChannelContext| {}),
            observer: TrackerObserver::default(),
            handshake_timeout: Duration::from_secs(1),
            announce_interval: Duration::from_secs(120),
            offers_per_announce: 1,
        }))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_get_shares_one_client() {
        let pool = pool();
        let mut tasks = Vec::new();
        for i in 0..16u8 {
            let pool = pool.clone();
            tasks.push(tokio::spawn(async move { pool.get(URL, ContentId([i; 20])) }));
        }
        let mut leases = Vec::new();
        for task in tasks {
            leases.push(task.await.unwrap());
        }

        let first = leases[0].client().clone();
        assert!(leases.iter().all(|lease| Arc::ptr_eq(lease.client(), &first)));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.ref_count(URL), 16);

        for lease in leases {
            lease.release().unwrap();
        }
        assert!(pool.is_empty());
        assert!(first.is_closed());
    }

    #[tokio::test]
    async fn test_new_client_after_refcount_reaches_zero() {
        let pool = pool();
        let first = pool.get(URL, ContentId([1; 20]));
        let second = pool.get(URL, ContentId([2; 20]));
        let client = first.client().clone();

        first.release().unwrap();
        assert_eq!(pool.ref_count(URL), 1);
        assert!(!client.is_closed());

        second.release().unwrap();
        assert_eq!(pool.ref_count(URL), 0);
        assert!(client.is_closed());

        let third = pool.get(URL, ContentId([3; 20]));
        assert!(!Arc::ptr_eq(third.client(), &client));
        third.release().unwrap();
    }

    #[tokio::test]
    async fn test_release_drops_offers_for_content_id_only() {
        let pool = pool();
        let first = pool.get(URL, ContentId([1; 20]));
        let second = pool.get(URL, ContentId([2; 20]));
        first.announce(AnnounceEvent::Started);
        second.announce(AnnounceEvent::Started);
        let client = first.client().clone();

        first.release().unwrap();
        assert!(!client.is_announced(&ContentId([1; 20])));
        assert!(client.is_announced(&ContentId([2; 20])));
        second.release().unwrap();
    }

    #[tokio::test]
    async fn test_unbalanced_release_is_detected() {
        let pool = pool();
        let lease = pool.get(URL, ContentId([1; 20]));
        let client = lease.client().clone();
        lease.release().unwrap();

        let result = pool.release_client(URL, &client, &ContentId([1; 20]));
        assert_eq!(result, Err(PoolError::UnbalancedRelease { url: URL.to_string() }));
        assert!(pool.is_empty());
    }

    #[tokio::test]
    async fn test_dropped_lease_releases() {
        let pool = pool();
        {
            let _lease = pool.get(URL, ContentId([1; 20]));
            assert_eq!(pool.ref_count(URL), 1);
        }
        assert!(pool.is_empty());
    }
}
