//! Pool error enumerations.

/// Misuse of the pool's reference counting.
pub mod pool_error;
