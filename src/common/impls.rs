//! Implementation blocks for common types.

/// CustomError implementation: construction, Display, Error.
pub mod custom_error;
