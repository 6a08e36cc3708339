use serde::{Deserialize, Serialize};
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::rtc_config::RtcConfig;
use crate::config::structs::tracker_client_config::TrackerClientConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub peer_id_prefix: String,
    #[serde(default)]
    pub disable_trackers: bool,
    pub tracker_client: TrackerClientConfig,
    #[serde(default)]
    pub rtc: RtcConfig,
    pub peer: PeerConfig,
}
