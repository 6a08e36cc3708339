use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeerConfig {
    /// Bytes requested per `request` message.
    pub chunk_size: u32,
    /// Capacity of observer channels created by `ClientObservers::channels`.
    pub observer_capacity: usize,
}
