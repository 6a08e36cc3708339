use tokio::time::Instant;
use crate::tracker::enums::announce_event::AnnounceEvent;

#[derive(Debug, Clone, Copy)]
pub struct AnnounceSlot {
    /// Event carried by the next announce; reset to `None` once sent.
    pub event: AnnounceEvent,
    /// `None` while an announce is in flight.
    pub next_announce: Option<Instant>,
}
