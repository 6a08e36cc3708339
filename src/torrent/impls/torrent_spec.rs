use std::sync::Arc;
use crate::metainfo::structs::content_id::ContentId;
use crate::metainfo::structs::piece_set::PieceSet;
use crate::torrent::structs::torrent_spec::TorrentSpec;
use crate::torrent::traits::piece_storage::PieceStorage;

impl TorrentSpec {
    /// The content id defaults to the piece set's own [`PieceSet::content_id`].
    pub fn new(piece_set: PieceSet, storage: Arc<dyn PieceStorage>) -> TorrentSpec {
        TorrentSpec {
            info_hash: piece_set.content_id(),
            piece_set: Arc::new(piece_set),
            storage,
            trackers: Vec::new(),
        }
    }

    pub fn with_info_hash(mut self, info_hash: ContentId) -> TorrentSpec {
        self.info_hash = info_hash;
        self
    }

    pub fn with_trackers<I, S>(mut self, trackers: I) -> TorrentSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trackers = trackers.into_iter().map(Into::into).collect();
        self
    }
}
