use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerClientStats {
    pub offers_sent: u64,
    pub answers_received: u64,
    pub offers_received: u64,
    pub answers_sent: u64,
    pub negotiation_failures: u64,
    pub channels_opened: u64,
}
