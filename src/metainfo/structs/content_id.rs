//! Shared file set identifier.

/// A 20-byte content identifier.
///
/// Peers announce and negotiate around this value; it plays the role of the
/// BitTorrent info hash. On the WebTorrent wire it travels as a binary string,
/// in logs and configuration as 40 hex characters.
///
/// # Example
///
/// ```rust
/// use rtc_swarm::metainfo::structs::content_id::ContentId;
///
/// let id: ContentId = "0123456789abcdef0123456789abcdef01234567".parse().unwrap();
/// assert_eq!(id.to_string(), "0123456789abcdef0123456789abcdef01234567");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ContentId(pub [u8; 20]);
