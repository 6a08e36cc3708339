use crate::metainfo::structs::content_id::ContentId;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::peer::{HANDSHAKE_LENGTH, PROTOCOL};
use crate::peer::structs::handshake::Handshake;
use crate::tracker::structs::peer_id::PeerId;

impl Handshake {
    pub fn to_bytes(&self) -> [u8; HANDSHAKE_LENGTH] {
        let mut bytes = [0u8; HANDSHAKE_LENGTH];
        bytes[0] = PROTOCOL.len() as u8;
        bytes[1..20].copy_from_slice(PROTOCOL);
        bytes[28..48].copy_from_slice(&self.info_hash.0);
        bytes[48..68].copy_from_slice(&self.peer_id.0);
        bytes
    }

    pub fn from_bytes(bytes: &[u8; HANDSHAKE_LENGTH]) -> Result<Handshake, PeerError> {
        if bytes[0] as usize != PROTOCOL.len() || &bytes[1..20] != PROTOCOL {
            return Err(PeerError::InvalidProtocol);
        }
        let mut info_hash = [0u8; 20];
        let mut peer_id = [0u8; 20];
        info_hash.copy_from_slice(&bytes[28..48]);
        peer_id.copy_from_slice(&bytes[48..68]);
        Ok(Handshake {
            info_hash: ContentId(info_hash),
            peer_id: PeerId(peer_id),
        })
    }
}
