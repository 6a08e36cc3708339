use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::observer::structs::tracker_observer::TrackerObserver;
use crate::rtc::traits::negotiator::Negotiator;
use crate::rtc::types::OnConn;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::types::AnnounceRequestFactory;
use crate::tracker_client::structs::tcp_dialer::TcpDialer;
use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
use crate::tracker_client::traits::dialer::Dialer;

impl TrackerClientSettings {
    pub fn from_config(
        config: &Configuration,
        peer_id: PeerId,
        negotiator: Arc<dyn Negotiator>,
        request_factory: AnnounceRequestFactory,
        on_conn: OnConn,
        observer: TrackerObserver,
    ) -> TrackerClientSettings {
        TrackerClientSettings {
            peer_id,
            negotiator,
            dialer: Arc::new(TcpDialer::new(config.tracker_client.proxy.clone())),
            http_headers: config.tracker_client.http_headers.clone(),
            request_factory,
            on_conn,
            observer,
            handshake_timeout: config.handshake_timeout(),
            announce_interval: config.announce_interval(),
            offers_per_announce: config.tracker_client.offers_per_announce,
        }
    }

    pub fn with_dialer(mut self, dialer: Arc<dyn Dialer>) -> TrackerClientSettings {
        self.dialer = dialer;
        self
    }
}
