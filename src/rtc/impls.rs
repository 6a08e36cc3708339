//! Implementation blocks for negotiators and channels.

/// WebRtcNegotiator implementation: peer connection setup, offers and answers.
pub mod webrtc_negotiator;

/// WebRtcOffer implementation: completing a local offer with the remote answer.
pub mod webrtc_offer;

/// WebRtcChannel implementation: AsyncRead/AsyncWrite over a detached channel.
pub mod webrtc_channel;
