//! Negotiation seams.

/// Creates offers and answers offers.
pub mod negotiator;

/// A pending local offer.
pub mod offer_handle;

/// Byte stream of an open data channel.
pub mod data_channel_io;
