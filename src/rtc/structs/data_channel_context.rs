use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataChannelContext {
    pub offer_id: [u8; 20],
    /// `true` when this side created the offer.
    pub local_offered: bool,
    pub info_hash: ContentId,
    pub remote_peer_id: PeerId,
    pub tracker_url: String,
}
