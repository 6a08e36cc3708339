//! Implementation blocks for configuration loading/saving.

/// Configuration defaults, TOML loading/saving and validation.
pub mod configuration;
