#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::io::DuplexStream;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use rtc_swarm::client::structs::client::Client;
use rtc_swarm::config::structs::configuration::Configuration;
use rtc_swarm::metainfo::structs::piece_set::PieceSet;
use rtc_swarm::observer::structs::client_observers::ClientObservers;
use rtc_swarm::observer::structs::peer_observer::PeerObserver;
use rtc_swarm::rtc::enums::negotiation_error::NegotiationError;
use rtc_swarm::rtc::traits::negotiator::Negotiator;
use rtc_swarm::rtc::traits::offer_handle::OfferHandle;
use rtc_swarm::rtc::types::{DataChannelConn, PendingChannel};
use rtc_swarm::torrent::structs::memory_storage::MemoryStorage;
use rtc_swarm::torrent::structs::torrent::Torrent;
use rtc_swarm::tracker::structs::peer_id::PeerId;
use rtc_swarm::webtorrent::enums::wt_sdp_type::WtSdpType;
use rtc_swarm::webtorrent::structs::wt_session_description::WtSessionDescription;

pub const LOOPBACK_BUFFER: usize = 256 * 1024;

#[derive(Debug, Clone)]
pub enum TrackerMode {
    /// Acknowledges announces and relays offers and answers between peers.
    Relay,
    /// Answers every announce with a failure reason.
    Reject(String),
}

pub struct TestTracker {
    pub url: String,
    pub announces: Arc<AtomicU64>,
    pub handle: JoinHandle<()>,
}

#[derive(Default)]
struct RelayState {
    swarms: HashMap<String, Vec<String>>,
    peers: HashMap<String, mpsc::UnboundedSender<String>>,
}

/// In-process WebTorrent tracker on an ephemeral localhost port.
pub async fn spawn_tracker(mode: TrackerMode) -> TestTracker {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("ws://{}", listener.local_addr().unwrap());
    let state = Arc::new(Mutex::new(RelayState::default()));
    let announces = Arc::new(AtomicU64::new(0));
    let counter = announces.clone();
    let handle = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(serve(stream, state.clone(), mode.clone(), counter.clone()));
        }
    });
    TestTracker { url, announces, handle }
}

/// A `ws://` URL on which nothing listens.
pub async fn closed_tracker_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("ws://{address}")
}

async fn serve(stream: TcpStream, state: Arc<Mutex<RelayState>>, mode: TrackerMode, announces: Arc<AtomicU64>) {
    let Ok(websocket) = accept_async(stream).await else {
        return;
    };
    let (mut sink, mut source) = websocket.split();
    let (sender, mut outbound) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(async move {
        while let Some(text) = outbound.recv().await {
            if sink.send(Message::text(text)).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(frame)) = source.next().await {
        let Message::Text(text) = frame else {
            continue;
        };
        let Ok(request) = serde_json::from_str::<Value>(text.as_str()) else {
            continue;
        };
        handle_announce(&state, &mode, &sender, request);
        announces.fetch_add(1, Ordering::SeqCst);
    }
    writer.abort();
}

fn handle_announce(state: &Mutex<RelayState>, mode: &TrackerMode, sender: &mpsc::UnboundedSender<String>, request: Value) {
    let info_hash = request["info_hash"].as_str().unwrap_or_default().to_string();
    let peer_id = request["peer_id"].as_str().unwrap_or_default().to_string();

    if let TrackerMode::Reject(reason) = mode {
        let _ = sender.send(json!({ "failure reason": reason, "info_hash": info_hash }).to_string());
        return;
    }

    let mut guard = state.lock();
    let state = &mut *guard;
    state.peers.insert(peer_id.clone(), sender.clone());

    if request.get("answer").is_some() {
        let target = request["to_peer_id"].as_str().and_then(|to| state.peers.get(to));
        if let Some(target) = target {
            let offer_id = request["offer_id"].clone();
            let answer = request["answer"].clone();
            let _ = target.send(json!({
                "action": "announce",
                "info_hash": info_hash,
                "peer_id": peer_id,
                "offer_id": offer_id,
                "answer": answer,
            }).to_string());
        }
        return;
    }

    let swarm = state.swarms.entry(info_hash.clone()).or_default();
    if !swarm.contains(&peer_id) {
        swarm.push(peer_id.clone());
    }
    let _ = sender.send(json!({
        "action": "announce",
        "info_hash": info_hash,
        "interval": 120,
        "complete": 0,
        "incomplete": swarm.len(),
    }).to_string());

    let Some(offers) = request["offers"].as_array() else {
        return;
    };
    for (other, offer) in swarm.iter().filter(|other| **other != peer_id).zip(offers) {
        if let Some(target) = state.peers.get(other) {
            let offer_id = offer["offer_id"].clone();
            let description = offer["offer"].clone();
            let _ = target.send(json!({
                "action": "announce",
                "info_hash": info_hash,
                "peer_id": peer_id,
                "offer_id": offer_id,
                "offer": description,
            }).to_string());
        }
    }
}

/// Pairs offers and answers through in-memory pipes shared by every
/// negotiator cloned from the same hub.
#[derive(Clone, Default)]
pub struct LoopbackNegotiator {
    next_id: Arc<AtomicU64>,
    waiting: Arc<Mutex<HashMap<String, DuplexStream>>>,
}

struct LoopbackOffer {
    description: WtSessionDescription,
    stream: DuplexStream,
}

#[async_trait]
impl Negotiator for LoopbackNegotiator {
    async fn create_offer(&self) -> Result<Box<dyn OfferHandle>, NegotiationError> {
        let id = format!("loopback:{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let (local, remote) = tokio::io::duplex(LOOPBACK_BUFFER);
        self.waiting.lock().insert(id.clone(), remote);
        Ok(Box::new(LoopbackOffer {
            description: WtSessionDescription::offer(id),
            stream: local,
        }))
    }

    async fn accept_offer(&self, offer: WtSessionDescription) -> Result<(WtSessionDescription, PendingChannel), NegotiationError> {
        if offer.sdp_type != WtSdpType::Offer {
            return Err(NegotiationError::InvalidDescription("expected an offer".to_string()));
        }
        let stream = self.waiting.lock().remove(&offer.sdp)
            .ok_or_else(|| NegotiationError::InvalidDescription(offer.sdp.clone()))?;
        let pending: PendingChannel = Box::pin(async move { Ok(Box::new(stream) as DataChannelConn) });
        Ok((WtSessionDescription::answer(offer.sdp), pending))
    }
}

#[async_trait]
impl OfferHandle for LoopbackOffer {
    fn description(&self) -> &WtSessionDescription {
        &self.description
    }

    async fn accept_answer(self: Box<Self>, answer: WtSessionDescription) -> Result<DataChannelConn, NegotiationError> {
        let LoopbackOffer { description, stream } = *self;
        if answer.sdp != description.sdp {
            return Err(NegotiationError::InvalidDescription(answer.sdp));
        }
        Ok(Box::new(stream))
    }
}

pub fn test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_level = "off".to_string();
    config.tracker_client.handshake_timeout = 5;
    config.tracker_client.offers_per_announce = 1;
    config.rtc.ice_servers.clear();
    config
}

pub fn loopback_client(hub: &LoopbackNegotiator, observers: ClientObservers) -> Client {
    Client::with_negotiator(Arc::new(test_config()), observers, Arc::new(hub.clone()), None)
}

/// Polls `condition` until it holds or five seconds pass.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..500 {
        if condition() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    condition()
}

/// Deterministic, non-repeating test content.
pub fn test_data(length: usize) -> Vec<u8> {
    (0..length).map(|i| ((i * 31 + i / 251) % 256) as u8).collect()
}

/// A torrent over `data`, either fully seeded or empty.
pub async fn test_torrent(data: &[u8], piece_length: u64, chunk_size: u32, seeded: bool, observer: PeerObserver) -> Arc<Torrent> {
    let piece_set = PieceSet::from_bytes(data, piece_length).unwrap();
    let storage = if seeded {
        MemoryStorage::from_bytes(piece_length, data.to_vec())
    } else {
        MemoryStorage::new(piece_length, data.len() as u64)
    };
    let torrent = Arc::new(Torrent::new(
        piece_set.content_id(),
        PeerId::generate("-RS0300-"),
        Arc::new(piece_set),
        Arc::new(storage),
        chunk_size,
        observer,
    ).unwrap());
    torrent.verify_existing().await.unwrap();
    torrent
}
