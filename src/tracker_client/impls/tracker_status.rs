use std::sync::Arc;
use std::time::Duration;
use crate::tracker_client::enums::tracker_client_error::TrackerClientError;
use crate::tracker_client::structs::tracker_status::TrackerStatus;

impl TrackerStatus {
    pub fn connected(url: &str) -> TrackerStatus {
        TrackerStatus {
            url: url.to_string(),
            ok: true,
            err: None,
            retry_in: None,
        }
    }

    pub fn announced(url: &str, retry_in: Duration) -> TrackerStatus {
        TrackerStatus {
            url: url.to_string(),
            ok: true,
            err: None,
            retry_in: Some(retry_in),
        }
    }

    pub fn failed(url: &str, err: Arc<TrackerClientError>) -> TrackerStatus {
        TrackerStatus {
            url: url.to_string(),
            ok: false,
            err: Some(err),
            retry_in: None,
        }
    }

    pub fn with_retry(mut self, retry_in: Duration) -> TrackerStatus {
        self.retry_in = Some(retry_in);
        self
    }
}
