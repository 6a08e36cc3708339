//! Common data structures.

/// Error type carrying a plain message.
pub mod custom_error;
