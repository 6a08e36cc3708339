//! Top-level swarm session.
//!
//! A [`Client`](structs::client::Client) ties the pieces together: one local
//! peer identity, one [`TrackerClientPool`](crate::tracker_pool::structs::tracker_client_pool::TrackerClientPool)
//! shared by every torrent, the observers, and the torrents themselves. The
//! pool's announce request factory and connection callback look torrents up by
//! content id, so a data channel negotiated through any tracker lands in the
//! right torrent.
//!
//! ```rust,ignore
//! let client = Client::new(Arc::new(Configuration::init()), ClientObservers::disabled());
//! let piece_set = PieceSet::from_bytes(&data, 262144)?;
//! let storage = Arc::new(MemoryStorage::from_bytes(262144, data));
//! let torrent = client.add_torrent(
//!     TorrentSpec::new(piece_set, storage).with_trackers(["wss://tracker.example.com"])
//! ).await?;
//! ```

/// Client error enumeration.
pub mod enums;

/// Client structure.
pub mod structs;

/// Client implementation.
pub mod impls;
