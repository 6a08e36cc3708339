use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerClientConfig {
    /// Seconds allowed for TCP connect plus the WebSocket upgrade.
    pub handshake_timeout: u64,
    /// Fallback re-announce interval in seconds, used until a tracker supplies one.
    pub announce_interval: u64,
    pub offers_per_announce: u32,
    /// Extra headers sent with the WebSocket upgrade request.
    #[serde(default)]
    pub http_headers: BTreeMap<String, String>,
    /// HTTP CONNECT proxy, as `host:port`.
    #[serde(default)]
    pub proxy: Option<String>,
}
