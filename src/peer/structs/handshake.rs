use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handshake {
    pub info_hash: ContentId,
    pub peer_id: PeerId,
}
