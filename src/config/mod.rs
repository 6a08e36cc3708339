//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the client
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **tracker_client**: WebSocket tracker handshake, announce and proxy settings
//! - **rtc**: ICE servers handed to the WebRTC negotiator
//! - **peer**: chunk size and observer channel capacity
//!
//! # Example
//!
//! ```rust,ignore
//! use rtc_swarm::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when missing
//! let config = Configuration::load_from_file(true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
