use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};
use tokio::time::Instant;
use tokio_tungstenite::tungstenite::Message;
use crate::metainfo::structs::content_id::ContentId;
use crate::observer::structs::status_emitter::StatusEmitter;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker_client::enums::signaling_state::SignalingState;
use crate::tracker_client::enums::tracker_client_error::TrackerClientError;
use crate::tracker_client::structs::announce_slot::AnnounceSlot;
use crate::tracker_client::structs::tracker_client::TrackerClient;
use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
use crate::tracker_client::structs::tracker_client_state::TrackerClientState;
use crate::tracker_client::structs::tracker_client_stats::TrackerClientStats;
use crate::tracker_client::structs::tracker_client_stats_atomic::TrackerClientStatsAtomic;
use crate::tracker_client::structs::tracker_status::TrackerStatus;
use crate::webtorrent::structs::wt_announce::WtAnnounce;
use crate::webtorrent::webtorrent::encode_announce;

impl TrackerClient {
    pub fn new(url: &str, settings: TrackerClientSettings) -> TrackerClient {
        let (shutdown, _) = watch::channel(false);
        TrackerClient {
            url: url.to_string(),
            conn_status: StatusEmitter::new(&settings.observer.conn_status),
            announce_status: StatusEmitter::new(&settings.observer.announce_status),
            state: Mutex::new(TrackerClientState {
                signaling: SignalingState::Disconnected,
                started: false,
                closed: false,
                writer: None,
                interval: settings.announce_interval,
                announced: HashMap::new(),
                outbound_offers: HashMap::new(),
                negotiations: HashMap::new(),
            }),
            stats: TrackerClientStatsAtomic::default(),
            shutdown,
            settings,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn signaling_state(&self) -> SignalingState {
        self.state.lock().signaling
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    pub fn stats(&self) -> TrackerClientStats {
        self.stats.snapshot()
    }

    pub fn status_line(&self) -> String {
        let stats = self.stats();
        format!(
            "[TRACKER CLIENT] {} - offers sent: {} | answers recv: {} | offers recv: {} | answers sent: {} | failed: {} | channels: {}",
            self.url,
            stats.offers_sent,
            stats.answers_received,
            stats.offers_received,
            stats.answers_sent,
            stats.negotiation_failures,
            stats.channels_opened
        )
    }

    /// Spawns the connection loop. `on_error` runs once when the loop ends, with
    /// `None` after a clean shutdown.
    pub fn start<F>(self: &Arc<Self>, on_error: F)
    where
        F: FnOnce(Option<Arc<TrackerClientError>>) + Send + 'static,
    {
        {
            let mut state = self.state.lock();
            if state.started {
                warn!("[TRACKER CLIENT] {} already started", self.url);
                return;
            }
            state.started = true;
        }

        let client = self.clone();
        tokio::spawn(async move {
            let error = client.clone().run().await.err();
            if let Some(error) = &error {
                error!("[TRACKER CLIENT] {} stopped: {}", client.url, error);
            } else {
                info!("[TRACKER CLIENT] {} stopped", client.url);
            }
            on_error(error);
        });
    }

    /// Registers `info_hash` for announcing. It is announced right away when
    /// connected, otherwise as soon as the connection comes up.
    pub fn announce(self: &Arc<Self>, event: AnnounceEvent, info_hash: ContentId) {
        let send_now = {
            let mut state = self.state.lock();
            if state.closed {
                debug!("[TRACKER CLIENT] {} closed, not announcing {}", self.url, info_hash);
                return;
            }
            let connected = state.signaling == SignalingState::Connected;
            let slot = state.announced.entry(info_hash).or_insert(AnnounceSlot {
                event,
                next_announce: Some(Instant::now()),
            });
            slot.event = event;
            let in_flight = slot.next_announce.is_none();
            if connected && !in_flight {
                slot.next_announce = None;
            }
            connected && !in_flight
        };
        if send_now {
            self.schedule_announce(info_hash);
        }
    }

    pub fn is_announced(&self, info_hash: &ContentId) -> bool {
        self.state.lock().announced.contains_key(info_hash)
    }

    /// Drops pending offers, in-flight negotiations and the announce
    /// registration of `info_hash`. The connection stays up.
    pub fn close_offers_for_infohash(&self, info_hash: &ContentId) {
        let (offers, negotiations) = {
            let mut state = self.state.lock();
            state.announced.remove(info_hash);
            let offer_ids: Vec<[u8; 20]> = state.outbound_offers.iter()
                .filter(|(_, offer)| offer.info_hash == *info_hash)
                .map(|(offer_id, _)| *offer_id)
                .collect();
            let offers: Vec<_> = offer_ids.iter()
                .filter_map(|offer_id| state.outbound_offers.remove(offer_id))
                .collect();
            (offers, state.negotiations.remove(info_hash).unwrap_or_default())
        };
        for handle in &negotiations {
            handle.abort();
        }
        debug!(
            "[TRACKER CLIENT] {} closed {} offers and {} negotiations for {}",
            self.url, offers.len(), negotiations.len(), info_hash
        );
    }

    /// Terminates the connection and every negotiation. Idempotent.
    pub fn close(&self) {
        let (offers, negotiations) = {
            let mut state = self.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            state.announced.clear();
            let offers: Vec<_> = state.outbound_offers.drain().map(|(_, offer)| offer).collect();
            let negotiations: Vec<_> = state.negotiations.drain().flat_map(|(_, handles)| handles).collect();
            (offers, negotiations)
        };
        for handle in &negotiations {
            handle.abort();
        }
        drop(offers);
        self.shutdown.send_replace(true);
        info!("[TRACKER CLIENT] {} closing", self.url);
    }

    pub(crate) fn emit_conn_status(&self, status: TrackerStatus) {
        self.conn_status.emit(status);
    }

    pub(crate) fn emit_announce_status(&self, status: TrackerStatus) {
        self.announce_status.emit(status);
    }

    /// Spawns `future` as a negotiation of `info_hash`; it is aborted by
    /// `close_offers_for_infohash` and `close`.
    pub(crate) fn spawn_tracked<F>(&self, info_hash: ContentId, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(future);
        let mut state = self.state.lock();
        if state.closed || !state.announced.contains_key(&info_hash) {
            task.abort();
            return;
        }
        let handles = state.negotiations.entry(info_hash).or_default();
        handles.retain(|handle| !handle.is_finished());
        handles.push(task.abort_handle());
    }

    /// Queues `message` for the writer task and waits until it hit the socket.
    pub(crate) async fn send_message(&self, message: &WtAnnounce) -> Result<(), TrackerClientError> {
        let text = encode_announce(message)?;
        let writer = self.state.lock().writer.clone().ok_or(TrackerClientError::NotConnected)?;
        let (written, result) = oneshot::channel();
        writer
            .send((Message::text(text), Some(written)))
            .map_err(|_| TrackerClientError::NotConnected)?;
        match result.await {
            Ok(true) => Ok(()),
            _ => Err(TrackerClientError::ConnectionLost(String::from("write failed"))),
        }
    }

    pub(crate) fn count(&self, counter: &std::sync::atomic::AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

