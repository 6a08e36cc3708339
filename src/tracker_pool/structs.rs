//! Pool, entry and lease structures.

/// The pool.
pub mod tracker_client_pool;

/// A pooled client with its reference count.
pub mod pool_entry;

/// Single-use release capability for one `get`.
pub mod tracker_client_lease;
