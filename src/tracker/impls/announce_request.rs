use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer_id::PeerId;

pub const DEFAULT_NUMWANT: u32 = 50;

impl AnnounceRequest {
    pub fn new(event: AnnounceEvent, info_hash: ContentId, peer_id: PeerId, left: u64) -> AnnounceRequest {
        AnnounceRequest {
            event,
            info_hash,
            peer_id,
            uploaded: 0,
            downloaded: 0,
            left,
            numwant: DEFAULT_NUMWANT,
        }
    }

    pub fn with_totals(mut self, uploaded: u64, downloaded: u64) -> AnnounceRequest {
        self.uploaded = uploaded;
        self.downloaded = downloaded;
        self
    }
}
