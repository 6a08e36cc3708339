mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use rtc_swarm::metainfo::structs::piece_set::PieceSet;
use rtc_swarm::observer::structs::client_observers::ClientObservers;
use rtc_swarm::torrent::structs::memory_storage::MemoryStorage;
use rtc_swarm::torrent::structs::torrent_spec::TorrentSpec;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_signaled_transfer_through_relay_tracker() {
    let tracker = common::spawn_tracker(common::TrackerMode::Relay).await;
    let hub = common::LoopbackNegotiator::default();
    let data = common::test_data(200_000);
    let piece_set = PieceSet::from_bytes(&data, 32768).unwrap();

    let (seeder_observers, mut seeder_receivers) = ClientObservers::channels(16);
    let seeder = common::loopback_client(&hub, seeder_observers);
    let seeder_spec = TorrentSpec::new(piece_set.clone(), Arc::new(MemoryStorage::from_bytes(32768, data.clone())))
        .with_trackers([tracker.url.clone()]);
    let seeded = seeder.add_torrent(seeder_spec).await.unwrap();
    assert!(seeded.is_complete());

    let announced = timeout(Duration::from_secs(5), seeder_receivers.announce_status.recv()).await.unwrap().unwrap();
    assert!(announced.ok);
    assert!(common::eventually(|| tracker.announces.load(Ordering::SeqCst) >= 1).await);

    let (leecher_observers, mut leecher_receivers) = ClientObservers::channels(16);
    let leecher = common::loopback_client(&hub, leecher_observers);
    let storage = Arc::new(MemoryStorage::new(32768, data.len() as u64));
    let leecher_spec = TorrentSpec::new(piece_set, storage.clone()).with_trackers([tracker.url.clone()]);
    let leeching = leecher.add_torrent(leecher_spec).await.unwrap();
    assert_eq!(leeching.info_hash(), seeded.info_hash());
    assert!(!leeching.is_complete());

    assert!(timeout(Duration::from_secs(15), leeching.wait_complete()).await.unwrap());
    assert_eq!(storage.contents(), data);

    let peer = timeout(Duration::from_secs(5), leecher_receivers.peer_status.recv()).await.unwrap().unwrap();
    assert!(peer.ok);
    assert_eq!(peer.peer_id, Some(seeder.peer_id()));
    let seeder_peer = timeout(Duration::from_secs(5), seeder_receivers.peer_status.recv()).await.unwrap().unwrap();
    assert!(seeder_peer.ok);
    assert_eq!(seeder_peer.peer_id, Some(leecher.peer_id()));

    let leecher_tracker = leecher.pool().client(&tracker.url).unwrap();
    let seeder_tracker = seeder.pool().client(&tracker.url).unwrap();
    assert_eq!(leecher_tracker.stats().answers_received, 1);
    assert_eq!(seeder_tracker.stats().offers_received, 1);
    assert_eq!(seeder_tracker.stats().answers_sent, 1);
    assert_eq!(leecher_tracker.stats().channels_opened + seeder_tracker.stats().channels_opened, 2);

    leecher.close();
    let dropped = timeout(Duration::from_secs(5), leecher_receivers.peer_status.recv()).await.unwrap().unwrap();
    assert!(!dropped.ok);
    assert!(dropped.err.is_none());
    let seeder_dropped = timeout(Duration::from_secs(5), seeder_receivers.peer_status.recv()).await.unwrap().unwrap();
    assert!(!seeder_dropped.ok);
    seeder.close();
}
