use parking_lot::Mutex;
use tokio::sync::watch;
use crate::observer::structs::status_emitter::StatusEmitter;
use crate::tracker_client::structs::tracker_client_settings::TrackerClientSettings;
use crate::tracker_client::structs::tracker_client_state::TrackerClientState;
use crate::tracker_client::structs::tracker_client_stats_atomic::TrackerClientStatsAtomic;
use crate::tracker_client::structs::tracker_status::TrackerStatus;

pub struct TrackerClient {
    pub(crate) url: String,
    pub(crate) settings: TrackerClientSettings,
    pub(crate) state: Mutex<TrackerClientState>,
    pub(crate) stats: TrackerClientStatsAtomic,
    pub(crate) conn_status: StatusEmitter<TrackerStatus>,
    pub(crate) announce_status: StatusEmitter<TrackerStatus>,
    pub(crate) shutdown: watch::Sender<bool>,
}
