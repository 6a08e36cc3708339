use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Name used on the WebTorrent wire; `None` is not transmitted.
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            AnnounceEvent::None => None,
            AnnounceEvent::Completed => Some("completed"),
            AnnounceEvent::Started => Some("started"),
            AnnounceEvent::Stopped => Some("stopped"),
        }
    }
}
