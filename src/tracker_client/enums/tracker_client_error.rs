use std::time::Duration;
use thiserror::Error;
use tokio_tungstenite::tungstenite;
use crate::common::structs::custom_error::CustomError;

#[derive(Error, Debug)]
pub enum TrackerClientError {
    #[error("Invalid tracker URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid handshake header: {0}")]
    InvalidHeader(String),
    #[error("Failed to reach tracker: {0}")]
    Dial(#[from] std::io::Error),
    #[error("Tracker handshake timed out after {0:?}")]
    HandshakeTimeout(Duration),
    #[error("WebSocket handshake failed: {0}")]
    Handshake(#[source] tungstenite::Error),
    #[error("WebSocket transport error: {0}")]
    Transport(#[source] tungstenite::Error),
    #[error("Connection lost: {0}")]
    ConnectionLost(String),
    #[error("Announce request could not be built: {0}")]
    AnnounceRequest(CustomError),
    #[error("Tracker rejected announce: {0}")]
    Rejected(String),
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Not connected to tracker")]
    NotConnected,
    #[error("Tracker client closed")]
    Closed,
}
