//! Announce request types and peer identity.
//!
//! A torrent session describes itself to a tracker through an
//! [`AnnounceRequest`](structs::announce_request::AnnounceRequest), built on demand
//! by a caller-supplied factory (see [`types::AnnounceRequestFactory`]). The
//! tracker client calls the factory every time it (re)announces a content id, so
//! transfer totals are always current.
//!
//! # Main Components
//!
//! - `AnnounceEvent` - Announce lifecycle event (`started`, `completed`, `stopped`)
//! - `AnnounceRequest` - Snapshot of a torrent's announce parameters
//! - `PeerId` - 20-byte peer identifier

/// Enumerations for announce operations.
pub mod enums;

/// Data structures for announce operations.
pub mod structs;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Type aliases shared by announce producers and consumers.
pub mod types;
