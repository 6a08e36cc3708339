//! Implementation blocks for the pool and its leases.

/// TrackerClientPool implementation: get, release, inspection.
pub mod tracker_client_pool;

/// TrackerClientLease implementation: release and Drop.
pub mod tracker_client_lease;
