#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WtMessageType {
    AnnounceAck,
    Offer,
    Answer,
    Failure,
    Unknown,
}
