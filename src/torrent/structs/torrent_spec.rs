use std::sync::Arc;
use crate::metainfo::structs::content_id::ContentId;
use crate::metainfo::structs::piece_set::PieceSet;
use crate::torrent::traits::piece_storage::PieceStorage;

#[derive(Clone)]
pub struct TorrentSpec {
    pub info_hash: ContentId,
    pub piece_set: Arc<PieceSet>,
    pub storage: Arc<dyn PieceStorage>,
    pub trackers: Vec<String>,
}
