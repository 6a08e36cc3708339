use crate::torrent::types::PieceBitfield;

#[derive(Debug)]
pub struct TorrentState {
    pub completed: PieceBitfield,
    pub reserved: PieceBitfield,
    pub closed: bool,
}
