//! # rtc-swarm
//!
//! Core of a WebTorrent-style swarm client: peers exchange content-addressed
//! pieces of a shared file set, discover each other through WebSocket
//! trackers, connect over WebRTC data channels and verify every piece against
//! its published SHA-256 digest.
//!
//! ## Overview
//!
//! Two engines carry the weight:
//!
//! - **Tracker client multiplexer** - one signaling connection per tracker URL,
//!   shared by every torrent through a reference-counted pool, performing the
//!   offer/answer exchange that yields direct peer data channels.
//! - **Peer connection engine** - one session per data channel, tracking the
//!   remote's pieces and transfer counters, assembling pieces chunk by chunk
//!   and rejecting any piece whose digest does not match.
//!
//! Lifecycle events (tracker connection, announces, peer sessions) are
//! reported through optional status channels that never block transfers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rtc_swarm::client::structs::client::Client;
//! use rtc_swarm::config::structs::configuration::Configuration;
//! use rtc_swarm::metainfo::structs::piece_set::PieceSet;
//! use rtc_swarm::observer::structs::client_observers::ClientObservers;
//! use rtc_swarm::torrent::structs::memory_storage::MemoryStorage;
//! use rtc_swarm::torrent::structs::torrent_spec::TorrentSpec;
//!
//! let client = Client::new(Arc::new(Configuration::init()), ClientObservers::disabled());
//! let piece_set = PieceSet::from_bytes(&data, 262144)?;
//! let storage = Arc::new(MemoryStorage::from_bytes(262144, data));
//! let spec = TorrentSpec::new(piece_set, storage).with_trackers(["wss://tracker.example.com"]);
//! let torrent = client.add_torrent(spec).await?;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Session wiring the pool, observers and torrents together
//! - [`common`] - Shared helpers and the message-carrying error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`metainfo`] - Piece digests, piece sets and content ids
//! - [`observer`] - Optional, non-blocking status channels
//! - [`peer`] - Peer session lifecycle, wire codec and piece verification
//! - [`rtc`] - Negotiation seam and its WebRTC implementation
//! - [`torrent`] - Per-torrent bookkeeping and storage
//! - [`tracker`] - Announce requests and peer identities
//! - [`tracker_client`] - One WebSocket signaling connection per tracker
//! - [`tracker_pool`] - Reference-counted tracker client registry
//! - [`webtorrent`] - WebTorrent tracker wire messages

/// Top-level swarm session.
///
/// Owns the local peer identity, the tracker pool and every torrent, and
/// routes negotiated data channels to the torrent they belong to.
pub mod client;

/// Common utilities and shared functionality.
///
/// Binary string helpers for the WebTorrent wire format and the
/// `CustomError` type.
pub mod common;

/// Configuration management module.
///
/// Loads, saves and validates the TOML configuration.
pub mod config;

/// Logging setup.
pub mod logging;

/// Piece digests and piece sets.
///
/// Streams a byte source into one SHA-256 digest per piece and derives the
/// content id of the resulting piece set.
pub mod metainfo;

/// Status observation bus.
///
/// Optional channels for tracker connection, announce and peer session
/// events, delivered in order per entity without blocking the emitter.
pub mod observer;

/// Peer connection lifecycle and piece integrity.
pub mod peer;

/// Data channel negotiation.
///
/// The `Negotiator` seam used by tracker clients, and its WebRTC
/// implementation.
pub mod rtc;

/// CLI argument parsing.
pub mod structs;

/// Per-torrent shared state and storage.
pub mod torrent;

/// Announce requests, events and peer identities.
pub mod tracker;

/// WebSocket tracker client.
///
/// One connection per tracker URL: announces, offer/answer signaling and
/// status reporting.
pub mod tracker_client;

/// Tracker client pool.
///
/// Deduplicates tracker clients by URL and reference-counts their use.
pub mod tracker_pool;

/// WebTorrent tracker wire messages.
pub mod webtorrent;
