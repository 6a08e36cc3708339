use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::time::Instant;
use crate::common::common::to_binary_string;
use crate::metainfo::structs::content_id::ContentId;
use crate::rtc::structs::data_channel_context::DataChannelContext;
use crate::rtc::types::DataChannelConn;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker_client::enums::tracker_client_error::TrackerClientError;
use crate::tracker_client::structs::outbound_offer::OutboundOffer;
use crate::tracker_client::structs::tracker_client::TrackerClient;
use crate::tracker_client::structs::tracker_status::TrackerStatus;
use crate::webtorrent::enums::wt_message_type::WtMessageType;
use crate::webtorrent::structs::wt_announce::WtAnnounce;
use crate::webtorrent::structs::wt_announce_response::WtAnnounceResponse;
use crate::webtorrent::structs::wt_offer::WtOffer;
use crate::webtorrent::webtorrent::{decode_response, generate_offer_id};

impl TrackerClient {
    pub(crate) fn schedule_announce(self: &Arc<Self>, info_hash: ContentId) {
        let client = self.clone();
        self.spawn_tracked(info_hash, async move {
            client.send_announce(info_hash).await;
        });
    }

    fn reschedule(&self, info_hash: &ContentId, after: Duration) {
        let mut state = self.state.lock();
        if let Some(slot) = state.announced.get_mut(info_hash) {
            slot.next_announce = Some(Instant::now() + after);
        }
    }

    async fn send_announce(self: Arc<Self>, info_hash: ContentId) {
        let (event, interval) = {
            let mut state = self.state.lock();
            let interval = state.interval;
            let Some(slot) = state.announced.get_mut(&info_hash) else {
                return;
            };
            let event = slot.event;
            slot.event = AnnounceEvent::None;
            (event, interval)
        };

        let request = match (self.settings.request_factory)(event, info_hash) {
            Ok(request) => request,
            Err(error) => {
                warn!("[TRACKER CLIENT] {} announce request for {} failed: {}", self.url, info_hash, error);
                self.reschedule(&info_hash, interval);
                self.emit_announce_status(TrackerStatus::failed(&self.url, Arc::new(TrackerClientError::AnnounceRequest(error))).with_retry(interval));
                return;
            }
        };

        let mut offers = Vec::new();
        let mut handles = Vec::new();
        for _ in 0..self.settings.offers_per_announce {
            match self.settings.negotiator.create_offer().await {
                Ok(handle) => {
                    let offer_id = generate_offer_id();
                    offers.push(WtOffer {
                        offer_id: to_binary_string(&offer_id),
                        offer: handle.description().clone(),
                    });
                    handles.push((offer_id, handle));
                }
                Err(error) => {
                    self.count(&self.stats.negotiation_failures);
                    warn!("[TRACKER CLIENT] {} could not create offer: {}", self.url, error);
                }
            }
        }

        let stale = {
            let mut state = self.state.lock();
            if state.closed || !state.announced.contains_key(&info_hash) {
                return;
            }
            let stale: Vec<[u8; 20]> = state.outbound_offers.iter()
                .filter(|(_, offer)| offer.info_hash == info_hash)
                .map(|(offer_id, _)| *offer_id)
                .collect();
            let stale: Vec<OutboundOffer> = stale.iter()
                .filter_map(|offer_id| state.outbound_offers.remove(offer_id))
                .collect();
            for (offer_id, handle) in handles {
                state.outbound_offers.insert(offer_id, OutboundOffer { info_hash, handle });
            }
            stale
        };
        drop(stale);

        let offer_count = offers.len() as u64;
        let result = self.send_message(&WtAnnounce::from_request(&request, offers)).await;
        let interval = self.state.lock().interval;
        self.reschedule(&info_hash, interval);
        match result {
            Ok(()) => {
                self.stats.offers_sent.fetch_add(offer_count, std::sync::atomic::Ordering::Relaxed);
                debug!("[TRACKER CLIENT] {} announced {} ({:?}) with {} offers", self.url, info_hash, event, offer_count);
                self.emit_announce_status(TrackerStatus::announced(&self.url, interval));
            }
            Err(error) => {
                warn!("[TRACKER CLIENT] {} announce of {} failed: {}", self.url, info_hash, error);
                self.emit_announce_status(TrackerStatus::failed(&self.url, Arc::new(error)).with_retry(interval));
            }
        }
    }

    pub(crate) fn handle_message(self: &Arc<Self>, text: &str) {
        let response = match decode_response(text) {
            Ok(response) => response,
            Err(error) => {
                warn!("[TRACKER CLIENT] {} sent an undecodable message: {}", self.url, error);
                return;
            }
        };
        if let Some(warning) = &response.warning_message {
            warn!("[TRACKER CLIENT] {} warning: {}", self.url, warning);
        }

        match response.message_type() {
            WtMessageType::AnnounceAck => self.handle_ack(&response),
            WtMessageType::Failure => self.handle_failure(&response),
            WtMessageType::Offer => self.handle_offer(response),
            WtMessageType::Answer => self.handle_answer(response),
            WtMessageType::Unknown => debug!("[TRACKER CLIENT] {} ignoring message: {}", self.url, text),
        }
    }

    fn handle_ack(&self, response: &WtAnnounceResponse) {
        let Some(interval) = response.interval.filter(|interval| *interval > 0) else {
            return;
        };
        let interval = Duration::from_secs(interval);
        let mut state = self.state.lock();
        if state.interval != interval {
            debug!("[TRACKER CLIENT] {} announce interval now {:?}", self.url, interval);
            state.interval = interval;
            if let Some(slot) = response.content_id().and_then(|info_hash| state.announced.get_mut(&info_hash))
                && slot.next_announce.is_some()
            {
                slot.next_announce = Some(Instant::now() + interval);
            }
        }
    }

    fn handle_failure(&self, response: &WtAnnounceResponse) {
        let reason = response.failure_reason.clone().unwrap_or_default();
        warn!("[TRACKER CLIENT] {} rejected announce: {}", self.url, reason);
        let interval = self.state.lock().interval;
        self.emit_announce_status(TrackerStatus::failed(&self.url, Arc::new(TrackerClientError::Rejected(reason))).with_retry(interval));
    }

    fn handle_offer(self: &Arc<Self>, response: WtAnnounceResponse) {
        let (Some(info_hash), Some(remote_peer_id), Some(offer_id), Some(offer)) =
            (response.content_id(), response.remote_peer_id(), response.offer_id_bytes(), response.offer)
        else {
            debug!("[TRACKER CLIENT] {} malformed offer", self.url);
            return;
        };
        if remote_peer_id == self.settings.peer_id {
            return;
        }
        if !self.is_announced(&info_hash) {
            debug!("[TRACKER CLIENT] {} offer for unregistered {}", self.url, info_hash);
            return;
        }
        self.count(&self.stats.offers_received);

        let client = self.clone();
        self.spawn_tracked(info_hash, async move {
            let (answer, pending) = match client.settings.negotiator.accept_offer(offer).await {
                Ok(accepted) => accepted,
                Err(error) => {
                    client.count(&client.stats.negotiation_failures);
                    warn!("[TRACKER CLIENT] {} could not answer offer from {}: {}", client.url, remote_peer_id, error);
                    return;
                }
            };
            let message = WtAnnounce::answer(&info_hash, &client.settings.peer_id, &remote_peer_id, &offer_id, answer);
            if let Err(error) = client.send_message(&message).await {
                client.count(&client.stats.negotiation_failures);
                warn!("[TRACKER CLIENT] {} could not send answer: {}", client.url, error);
                return;
            }
            client.count(&client.stats.answers_sent);
            match pending.await {
                Ok(conn) => client.dispatch_conn(conn, DataChannelContext {
                    offer_id,
                    local_offered: false,
                    info_hash,
                    remote_peer_id,
                    tracker_url: client.url.clone(),
                }),
                Err(error) => {
                    client.count(&client.stats.negotiation_failures);
                    warn!("[TRACKER CLIENT] {} answered channel to {} failed: {}", client.url, remote_peer_id, error);
                }
            }
        });
    }

    fn handle_answer(self: &Arc<Self>, response: WtAnnounceResponse) {
        let answered_info_hash = response.content_id();
        let (Some(remote_peer_id), Some(offer_id), Some(answer)) =
            (response.remote_peer_id(), response.offer_id_bytes(), response.answer)
        else {
            debug!("[TRACKER CLIENT] {} malformed answer", self.url);
            return;
        };
        let outbound = self.state.lock().outbound_offers.remove(&offer_id);
        let Some(outbound) = outbound else {
            debug!("[TRACKER CLIENT] {} answer for unknown offer", self.url);
            return;
        };
        if answered_info_hash.is_some_and(|info_hash| info_hash != outbound.info_hash) {
            debug!("[TRACKER CLIENT] {} answer for a different content id", self.url);
            return;
        }
        self.count(&self.stats.answers_received);

        let info_hash = outbound.info_hash;
        let client = self.clone();
        self.spawn_tracked(info_hash, async move {
            match outbound.handle.accept_answer(answer).await {
                Ok(conn) => client.dispatch_conn(conn, DataChannelContext {
                    offer_id,
                    local_offered: true,
                    info_hash,
                    remote_peer_id,
                    tracker_url: client.url.clone(),
                }),
                Err(error) => {
                    client.count(&client.stats.negotiation_failures);
                    warn!("[TRACKER CLIENT] {} offer to {} failed: {}", client.url, remote_peer_id, error);
                }
            }
        });
    }

    fn dispatch_conn(&self, conn: DataChannelConn, context: DataChannelContext) {
        self.count(&self.stats.channels_opened);
        info!(
            "[TRACKER CLIENT] {} data channel open with {} for {} (local offer: {})",
            self.url, context.remote_peer_id, context.info_hash, context.local_offered
        );
        let on_conn = self.settings.on_conn.clone();
        tokio::spawn(async move {
            on_conn(conn, context);
        });
    }
}
