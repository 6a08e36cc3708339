use crate::observer::structs::observer::Observer;
use crate::tracker_client::structs::tracker_status::TrackerStatus;

#[derive(Debug, Clone, Default)]
pub struct TrackerObserver {
    pub conn_status: Observer<TrackerStatus>,
    pub announce_status: Observer<TrackerStatus>,
}
