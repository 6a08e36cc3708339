//! Negotiation error enumerations.

/// Failure while negotiating or opening a data channel.
pub mod negotiation_error;
