//! Negotiator implementations and connection context.

/// Metadata handed to the connection callback with every new channel.
pub mod data_channel_context;

/// `webrtc` crate based negotiator.
pub mod webrtc_negotiator;

/// Offer awaiting its answer, created by `WebRtcNegotiator`.
pub mod webrtc_offer;

/// Detached data channel stream keeping its peer connection alive.
pub mod webrtc_channel;
