use thiserror::Error;
use crate::metainfo::structs::content_id::ContentId;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Torrent {0} already added")]
    DuplicateTorrent(ContentId),
    #[error("Unknown torrent {0}")]
    UnknownTorrent(ContentId),
    #[error("Invalid chunk size {0}")]
    InvalidChunkSize(u32),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Client closed")]
    Closed,
}
