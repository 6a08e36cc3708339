//! WebSocket tracker client with WebRTC signaling.
//!
//! A [`TrackerClient`](structs::tracker_client::TrackerClient) owns exactly one
//! WebSocket connection to one tracker URL and multiplexes every content id
//! registered on it. It announces each content id together with a batch of
//! fresh WebRTC offers, answers offers relayed by the tracker, completes its own
//! offers when answers arrive, and hands every opened data channel to the
//! connection callback on a separate task.
//!
//! # Lifecycle
//!
//! ```text
//!  Disconnected ──start()──▶ Connecting ──ok──▶ Connected
//!        ▲                       │                  │
//!        └────── failure ────────┴──────────────────┘   (terminal, no reconnect)
//! ```
//!
//! Exactly one ConnStatus is emitted per connection attempt. Announce outcomes
//! (including factory errors and `failure reason` responses) go to the
//! AnnounceStatus channel and never tear the connection down.
//!
//! # Concurrency
//!
//! The read loop, the writer and every negotiation run on their own tasks.
//! Shared state sits behind one `parking_lot::Mutex` that is never held across
//! an `.await`.
//!
//! # Example
//!
//! ```rust,ignore
//! let client = TrackerClient::new("wss://tracker.example.com", settings);
//! client.start(|error| if let Some(error) = error { eprintln!("{error}") });
//! client.announce(AnnounceEvent::Started, content_id);
//! ```

/// Signaling state and error enumerations.
pub mod enums;

/// Client, settings, status and bookkeeping structures.
pub mod structs;

/// Implementation blocks for the tracker client.
pub mod impls;

/// Connection seams.
pub mod traits;
