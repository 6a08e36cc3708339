mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use rtc_swarm::metainfo::structs::content_id::ContentId;
use rtc_swarm::observer::structs::client_observers::ClientObservers;
use rtc_swarm::torrent::structs::memory_storage::MemoryStorage;
use rtc_swarm::torrent::structs::torrent_spec::TorrentSpec;
use rtc_swarm::metainfo::structs::piece_set::PieceSet;
use rtc_swarm::tracker::enums::announce_event::AnnounceEvent;
use rtc_swarm::tracker_client::enums::signaling_state::SignalingState;
use rtc_swarm::tracker_client::enums::tracker_client_error::TrackerClientError;

fn seeded_spec(length: usize) -> TorrentSpec {
    let data = common::test_data(length);
    let piece_set = PieceSet::from_bytes(&data, 16384).unwrap();
    TorrentSpec::new(piece_set, Arc::new(MemoryStorage::from_bytes(16384, data)))
}

#[tokio::test]
async fn test_unreachable_tracker_reports_network_error() {
    let url = common::closed_tracker_url().await;
    let (observers, mut receivers) = ClientObservers::channels(8);
    let client = common::loopback_client(&common::LoopbackNegotiator::default(), observers);

    let lease = client.pool().get(&url, ContentId([7; 20]));
    lease.announce(AnnounceEvent::Started);

    let status = timeout(Duration::from_secs(5), receivers.conn_status.recv()).await.unwrap().unwrap();
    assert_eq!(status.url, url);
    assert!(!status.ok);
    assert!(matches!(status.err.as_deref(), Some(TrackerClientError::Dial(_))));
    assert_eq!(lease.client().signaling_state(), SignalingState::Disconnected);

    let announce = timeout(Duration::from_millis(300), receivers.announce_status.recv()).await;
    assert!(announce.is_err());

    lease.release().unwrap();
    assert!(client.pool().is_empty());
}

#[tokio::test]
async fn test_valid_tracker_connects_then_announces() {
    let tracker = common::spawn_tracker(common::TrackerMode::Relay).await;
    let (observers, mut receivers) = ClientObservers::channels(8);
    let client = common::loopback_client(&common::LoopbackNegotiator::default(), observers);

    let torrent = client.add_torrent(seeded_spec(40_000).with_trackers([tracker.url.clone()])).await.unwrap();

    let connected = timeout(Duration::from_secs(5), receivers.conn_status.recv()).await.unwrap().unwrap();
    assert!(connected.ok);
    assert!(connected.err.is_none());
    assert_eq!(connected.url, tracker.url);

    let announced = timeout(Duration::from_secs(5), receivers.announce_status.recv()).await.unwrap().unwrap();
    assert!(announced.ok);
    assert_eq!(announced.url, tracker.url);

    assert!(common::eventually(|| tracker.announces.load(Ordering::SeqCst) >= 1).await);
    let tracker_client = client.pool().client(&tracker.url).unwrap();
    assert_eq!(tracker_client.signaling_state(), SignalingState::Connected);
    assert!(tracker_client.is_announced(&torrent.info_hash()));
    assert_eq!(tracker_client.stats().offers_sent, 1);

    client.close();
    assert!(client.pool().is_empty());
    assert!(common::eventually(|| tracker_client.signaling_state() == SignalingState::Disconnected).await);
}

#[tokio::test]
async fn test_rejected_announce_reports_failure_reason() {
    let tracker = common::spawn_tracker(common::TrackerMode::Reject("torrent not allowed".to_string())).await;
    let (observers, mut receivers) = ClientObservers::channels(8);
    let client = common::loopback_client(&common::LoopbackNegotiator::default(), observers);

    client.add_torrent(seeded_spec(1000).with_trackers([tracker.url.clone()])).await.unwrap();

    let connected = timeout(Duration::from_secs(5), receivers.conn_status.recv()).await.unwrap().unwrap();
    assert!(connected.ok);

    let mut rejected = None;
    for _ in 0..2 {
        let status = timeout(Duration::from_secs(5), receivers.announce_status.recv()).await.unwrap().unwrap();
        if !status.ok {
            rejected = Some(status);
            break;
        }
    }
    let rejected = rejected.unwrap();
    match rejected.err.as_deref() {
        Some(TrackerClientError::Rejected(reason)) => assert_eq!(reason, "torrent not allowed"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(rejected.retry_in.is_some());
    client.close();
}

#[tokio::test]
async fn test_one_connection_shared_by_torrents() {
    let tracker = common::spawn_tracker(common::TrackerMode::Relay).await;
    let client = common::loopback_client(&common::LoopbackNegotiator::default(), ClientObservers::disabled());

    let first = client.add_torrent(seeded_spec(1000).with_trackers([tracker.url.clone()])).await.unwrap();
    let second = client.add_torrent(seeded_spec(2000).with_trackers([tracker.url.clone()])).await.unwrap();
    assert_eq!(client.pool().len(), 1);
    assert_eq!(client.pool().ref_count(&tracker.url), 2);
    assert!(common::eventually(|| tracker.announces.load(Ordering::SeqCst) >= 2).await);

    client.drop_torrent(&first.info_hash());
    let shared = client.pool().client(&tracker.url).unwrap();
    assert!(!shared.is_announced(&first.info_hash()));
    assert!(shared.is_announced(&second.info_hash()));
    assert_eq!(shared.signaling_state(), SignalingState::Connected);

    client.drop_torrent(&second.info_hash());
    assert!(client.pool().is_empty());
    assert!(shared.is_closed());
}
