use serde::{Deserialize, Serialize};
use crate::config::structs::ice_server_config::IceServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RtcConfig {
    #[serde(default)]
    pub ice_servers: Vec<IceServerConfig>,
}
