use thiserror::Error;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Error, Debug)]
pub enum PeerError {
    #[error("Peer I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Peer handshake timed out")]
    HandshakeTimeout,
    #[error("Invalid handshake protocol")]
    InvalidProtocol,
    #[error("Content id mismatch: expected {expected}, received {received}")]
    InfoHashMismatch { expected: ContentId, received: ContentId },
    #[error("Peer id mismatch: expected {expected}, received {received}")]
    PeerIdMismatch { expected: PeerId, received: PeerId },
    #[error("Connected to self")]
    SelfConnection,
    #[error("Message of {0} bytes exceeds the limit")]
    MessageTooLarge(u32),
    #[error("Unknown message id {0}")]
    UnknownMessage(u8),
    #[error("Malformed message: {0}")]
    MalformedMessage(String),
    #[error("Piece index {0} out of range")]
    InvalidPiece(u32),
    #[error("Invalid request for piece {index} at {begin} ({length} bytes)")]
    InvalidRequest { index: u32, begin: u32, length: u32 },
    #[error("Unrequested block for piece {index} at {begin}")]
    UnrequestedBlock { index: u32, begin: u32 },
    #[error("Too many corrupt pieces from peer")]
    TooManyFailures,
    #[error("Storage error: {0}")]
    Storage(std::io::Error),
    #[error("Connection cancelled")]
    Cancelled,
}
