use thiserror::Error;

#[derive(Error, Debug)]
pub enum NegotiationError {
    #[error("WebRTC error: {0}")]
    Rtc(#[from] webrtc::Error),
    #[error("Data channel did not open within {0:?}")]
    Timeout(std::time::Duration),
    #[error("Data channel closed before opening")]
    ChannelClosed,
    #[error("Invalid session description: {0}")]
    InvalidDescription(String),
}
