//! WebTorrent tracker wire messages.
//!
//! WebTorrent trackers speak JSON over WebSocket text frames. Every message from
//! a client is an `announce`; offers travel inside it, answers are announces
//! addressed to a peer with `to_peer_id`. Binary identifiers (`info_hash`,
//! `peer_id`, `offer_id`) are carried as binary strings, one char per byte.
//!
//! # Messages
//!
//! | Direction | Shape |
//! |---|---|
//! | client → tracker | `{action, info_hash, peer_id, numwant, uploaded, downloaded, left, event, offers:[{offer_id, offer:{type, sdp}}]}` |
//! | client → tracker | `{action, info_hash, peer_id, to_peer_id, offer_id, answer:{type, sdp}}` |
//! | tracker → client | `{action, info_hash, interval, complete, incomplete}` |
//! | tracker → client | `{action, info_hash, peer_id, offer_id, offer}` or `{..., answer}` |
//! | tracker → client | `{"failure reason": "..."}` |

/// Message classification enumerations.
pub mod enums;

/// Wire message structures.
pub mod structs;

/// Implementation blocks for wire messages.
pub mod impls;

/// Encoding and decoding helpers.
#[allow(clippy::module_inception)]
pub mod webtorrent;

/// Unit tests for the wire codec.
pub mod tests;
