//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the crate.
//!
//! # Utilities
//!
//! - Binary string encoding used by the WebTorrent wire format
//! - Hex formatting of fixed-length identifiers
//!
//! # Data Structures
//!
//! - `CustomError` - Message-carrying error type
//!
//! # Example
//!
//! ```rust
//! use rtc_swarm::common::common::{from_binary_string, to_binary_string};
//!
//! let encoded = to_binary_string(&[0x00, 0x7f, 0xff]);
//! assert_eq!(from_binary_string(&encoded), Some(vec![0x00, 0x7f, 0xff]));
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common helpers.
pub mod tests;
