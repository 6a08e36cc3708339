//! Peer connection lifecycle and piece integrity.
//!
//! A [`PeerConnection`](structs::peer_connection::PeerConnection) drives one
//! session with a remote peer over any byte stream, normally a WebRTC data
//! channel. It performs the handshake, keeps the remote's piece bitmap, serves
//! block requests from storage and fetches missing pieces chunk by chunk. Every
//! assembled piece is hashed and compared with the published digest before it
//! is written and marked complete; a mismatch leaves the piece missing so it can
//! be fetched again.
//!
//! # Lifecycle
//!
//! ```text
//!  Pending ──handshake ok──▶ Established ──close / EOF / error──▶ Dropped
//!     └──────────── handshake failure / cancel ──────────────────▶ Dropped
//! ```
//!
//! Each transition emits exactly one `PeerStatus`: `ok: true` on entering
//! Established, `ok: false` on entering Dropped (`err: None` for a graceful end).
//!
//! # Wire Protocol
//!
//! | Message | Layout |
//! |---|---|
//! | handshake | `19` `"BitTorrent protocol"` `reserved[8]` `info_hash[20]` `peer_id[20]` |
//! | keep-alive | `len=0` |
//! | have | `len=5` `id=4` `index:u32` |
//! | bitfield | `len=1+n` `id=5` `bits[n]` |
//! | request | `len=13` `id=6` `index:u32` `begin:u32` `length:u32` |
//! | piece | `len=9+n` `id=7` `index:u32` `begin:u32` `block[n]` |
//!
//! All integers are big-endian. Messages longer than 2 MiB are rejected.

/// Peer state, error and wire message enumerations.
pub mod enums;

/// Connection, handshake, status and counter structures.
pub mod structs;

/// Implementation blocks for peer types.
pub mod impls;

/// Wire codec helpers.
#[allow(clippy::module_inception)]
pub mod peer;
