use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use rtc_swarm::client::structs::client::Client;
use rtc_swarm::config::structs::configuration::Configuration;
use rtc_swarm::logging::setup_logging;
use rtc_swarm::metainfo::structs::piece_set::PieceSet;
use rtc_swarm::observer::structs::client_observers::ClientObservers;
use rtc_swarm::structs::Cli;
use rtc_swarm::torrent::structs::memory_storage::MemoryStorage;
use rtc_swarm::torrent::structs::torrent_spec::TorrentSpec;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if rustls::crypto::ring::default_provider().install_default().is_err() {
        warn!("[BOOT] A rustls crypto provider was already installed");
    }

    let Some(path) = args.seed.clone() else {
        info!("[BOOT] Nothing to seed, pass --seed <file> to share a file");
        return Ok(());
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let data = tokio::fs::read(&path).await?;
            let piece_set = PieceSet::from_bytes(&data, args.piece_length)?;
            info!("[BOOT] Hashed {} ({} bytes, {} pieces)", path.display(), data.len(), piece_set.piece_count());

            let (observers, mut receivers) = ClientObservers::channels(config.peer.observer_capacity);
            let client = Client::new(config.clone(), observers);
            let storage = Arc::new(MemoryStorage::from_bytes(args.piece_length, data));
            let spec = TorrentSpec::new(piece_set, storage).with_trackers(args.trackers.clone());
            let torrent = match client.add_torrent(spec).await {
                Ok(torrent) => torrent,
                Err(error) => {
                    error!("[BOOT] Unable to add torrent: {}", error);
                    return Ok(());
                }
            };
            info!("[BOOT] Seeding {} as {}", torrent.info_hash(), client.peer_id());

            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    interval.tick().await;
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
            });

            tokio::spawn(async move {
                while let Some(status) = receivers.conn_status.recv().await {
                    match status.err {
                        None => info!("[STATUS] Connected to {}", status.url),
                        Some(error) => warn!("[STATUS] Connection to {} failed: {}", status.url, error),
                    }
                }
            });
            tokio::spawn(async move {
                while let Some(status) = receivers.announce_status.recv().await {
                    match status.err {
                        None => info!("[STATUS] Announced on {}", status.url),
                        Some(error) => warn!("[STATUS] Announce on {} failed: {}", status.url, error),
                    }
                }
            });
            tokio::spawn(async move {
                while let Some(status) = receivers.peer_status.recv().await {
                    let peer = status.peer_id.map(|peer_id| peer_id.to_string()).unwrap_or_default();
                    match (status.ok, status.err) {
                        (true, _) => info!("[STATUS] Peer {} connected", peer),
                        (false, None) => info!("[STATUS] Peer {} disconnected", peer),
                        (false, Some(error)) => info!("[STATUS] Peer {} dropped: {}", peer, error),
                    }
                }
            });

            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let stats = torrent.stats();
                        info!("[STATS] uploaded: {} | peers: {}", stats.uploaded, stats.peers_active);
                        for line in client.status_lines() {
                            info!("[STATS] {}", line);
                        }
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown request received, shutting down...");
                        break;
                    }
                }
            }

            client.close();
            Ok::<(), std::io::Error>(())
        })
}
