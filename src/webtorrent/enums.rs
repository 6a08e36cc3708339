//! Message classification enumerations.

/// Kind of an inbound tracker message.
pub mod wt_message_type;

/// Session description type (`offer` or `answer`).
pub mod wt_sdp_type;
