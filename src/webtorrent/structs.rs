//! Wire message structures.

/// Outbound announce, also used for answers.
pub mod wt_announce;

/// Inbound tracker message (ack, relayed offer or answer, failure).
pub mod wt_announce_response;

/// One offer inside an announce.
pub mod wt_offer;

/// SDP payload with its type.
pub mod wt_session_description;
