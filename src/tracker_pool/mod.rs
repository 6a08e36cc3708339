//! Reference-counted pool of tracker clients.
//!
//! Many torrents usually share a handful of tracker URLs. The pool keeps at most
//! one live [`TrackerClient`](crate::tracker_client::structs::tracker_client::TrackerClient)
//! per URL: the first `get` creates and starts it, later ones reuse it, and the
//! release that drops the count to zero closes it and forgets the URL. A later
//! `get` for the same URL starts a fresh client.
//!
//! Every `get` hands out a [`TrackerClientLease`](structs::tracker_client_lease::TrackerClientLease).
//! Releasing consumes the lease, so a lease cannot be released twice; a lease
//! dropped without releasing is released by its `Drop` with a warning.
//!
//! The map sits behind one `parking_lot::Mutex` held only for the map operation.

/// Pool error enumerations.
pub mod enums;

/// Pool, entry and lease structures.
pub mod structs;

/// Implementation blocks for the pool and its leases.
pub mod impls;

/// Unit tests for reference counting.
pub mod tests;
