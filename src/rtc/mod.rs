//! Offer/answer negotiation of peer data channels.
//!
//! The tracker client only relays session descriptions; turning them into a
//! connected byte stream is the job of a [`Negotiator`](traits::negotiator::Negotiator).
//! The default implementation, [`WebRtcNegotiator`](structs::webrtc_negotiator::WebRtcNegotiator),
//! uses the `webrtc` crate with detached data channels, so an open channel is a
//! plain `AsyncRead + AsyncWrite` stream ([`types::DataChannelConn`]).
//!
//! # Flow
//!
//! ```text
//!  offering side                         answering side
//!  create_offer() ──offer sdp──▶ tracker ──▶ accept_offer(offer)
//!                                               │ answer sdp + pending channel
//!  accept_answer(answer) ◀── tracker ◀──────────┘
//!        │                                      │
//!        ▼                                      ▼
//!  DataChannelConn  ◀═══════ data channel ═══════▶ DataChannelConn
//! ```
//!
//! ICE servers come from the `[rtc]` configuration section and are passed
//! through unchanged.

/// Negotiation error enumerations.
pub mod enums;

/// Negotiator implementations and connection context.
pub mod structs;

/// Implementation blocks for negotiators and channels.
pub mod impls;

/// Negotiation seams.
pub mod traits;

/// Type aliases for connections and callbacks.
pub mod types;

/// Unit tests for negotiation helpers.
pub mod tests;
