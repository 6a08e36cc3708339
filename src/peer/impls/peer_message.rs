use std::io;
use std::io::{Cursor, Read, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::peer::enums::peer_error::PeerError;
use crate::peer::enums::peer_message::PeerMessage;
use crate::peer::peer::{MESSAGE_BITFIELD, MESSAGE_HAVE, MESSAGE_PIECE, MESSAGE_REQUEST};

impl PeerMessage {
    /// Encoded size including the 4-byte length prefix.
    pub fn encoded_len(&self) -> usize {
        4 + match self {
            PeerMessage::KeepAlive => 0,
            PeerMessage::Have(_) => 5,
            PeerMessage::Bitfield(bits) => 1 + bits.len(),
            PeerMessage::Request { .. } => 13,
            PeerMessage::Piece { block, .. } => 9 + block.len(),
        }
    }

    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u32::<NetworkEndian>((self.encoded_len() - 4) as u32)?;
        match self {
            PeerMessage::KeepAlive => {}
            PeerMessage::Have(index) => {
                bytes.write_u8(MESSAGE_HAVE)?;
                bytes.write_u32::<NetworkEndian>(*index)?;
            }
            PeerMessage::Bitfield(bits) => {
                bytes.write_u8(MESSAGE_BITFIELD)?;
                bytes.write_all(bits)?;
            }
            PeerMessage::Request { index, begin, length } => {
                bytes.write_u8(MESSAGE_REQUEST)?;
                bytes.write_u32::<NetworkEndian>(*index)?;
                bytes.write_u32::<NetworkEndian>(*begin)?;
                bytes.write_u32::<NetworkEndian>(*length)?;
            }
            PeerMessage::Piece { index, begin, block } => {
                bytes.write_u8(MESSAGE_PIECE)?;
                bytes.write_u32::<NetworkEndian>(*index)?;
                bytes.write_u32::<NetworkEndian>(*begin)?;
                bytes.write_all(block)?;
            }
        }
        Ok(())
    }

    /// Decodes a message body (id and payload, without the length prefix).
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PeerError> {
        let Some((&id, payload)) = bytes.split_first() else {
            return Ok(PeerMessage::KeepAlive);
        };
        let malformed = |_: io::Error| PeerError::MalformedMessage(format!("truncated message {id}"));
        let mut cursor = Cursor::new(payload);

        let message = match id {
            MESSAGE_HAVE => PeerMessage::Have(cursor.read_u32::<NetworkEndian>().map_err(malformed)?),
            MESSAGE_BITFIELD => {
                let mut bits = Vec::with_capacity(payload.len());
                cursor.read_to_end(&mut bits)?;
                PeerMessage::Bitfield(bits)
            }
            MESSAGE_REQUEST => PeerMessage::Request {
                index: cursor.read_u32::<NetworkEndian>().map_err(malformed)?,
                begin: cursor.read_u32::<NetworkEndian>().map_err(malformed)?,
                length: cursor.read_u32::<NetworkEndian>().map_err(malformed)?,
            },
            MESSAGE_PIECE => {
                let index = cursor.read_u32::<NetworkEndian>().map_err(malformed)?;
                let begin = cursor.read_u32::<NetworkEndian>().map_err(malformed)?;
                let mut block = Vec::with_capacity(payload.len().saturating_sub(8));
                cursor.read_to_end(&mut block)?;
                PeerMessage::Piece { index, begin, block }
            }
            other => return Err(PeerError::UnknownMessage(other)),
        };

        if cursor.position() != payload.len() as u64 {
            return Err(PeerError::MalformedMessage(format!("trailing bytes in message {id}")));
        }
        Ok(message)
    }
}
