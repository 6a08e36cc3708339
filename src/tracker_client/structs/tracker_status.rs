use std::sync::Arc;
use std::time::Duration;
use crate::tracker_client::enums::tracker_client_error::TrackerClientError;

/// Outcome of a connection attempt or an announce.
///
/// `ok` and `err` are mutually exclusive. `retry_in` carries the announce
/// interval in effect when the status was produced.
#[derive(Debug, Clone)]
pub struct TrackerStatus {
    pub url: String,
    pub ok: bool,
    pub err: Option<Arc<TrackerClientError>>,
    pub retry_in: Option<Duration>,
}
