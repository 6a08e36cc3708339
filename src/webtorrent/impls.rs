//! Implementation blocks for wire messages.

/// WtAnnounce implementation: building announces and answers.
pub mod wt_announce;

/// WtAnnounceResponse implementation: classification and field decoding.
pub mod wt_announce_response;

/// WtSessionDescription implementation: constructors.
pub mod wt_session_description;
