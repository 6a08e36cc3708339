//! Implementation blocks for tracker structs.

/// AnnounceEvent implementation: wire names.
pub mod announce_event;

/// AnnounceRequest implementation: builder helpers.
pub mod announce_request;

/// PeerId implementation: generation, Display, FromStr, client name lookup.
pub mod peer_id;
