use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::peer::enums::peer_error::PeerError;
use crate::peer::enums::peer_message::PeerMessage;
use crate::peer::structs::handshake::Handshake;

pub const PROTOCOL: &[u8; 19] = b"BitTorrent protocol";
pub const HANDSHAKE_LENGTH: usize = 68;
pub const MAX_MESSAGE_LENGTH: u32 = 2 * 1024 * 1024;

pub const MESSAGE_HAVE: u8 = 4;
pub const MESSAGE_BITFIELD: u8 = 5;
pub const MESSAGE_REQUEST: u8 = 6;
pub const MESSAGE_PIECE: u8 = 7;

/// Reads one message. `Ok(None)` means the stream ended on a message boundary.
pub async fn read_message<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Option<PeerMessage>, PeerError>
{
    let mut prefix = [0u8; 4];
    let mut filled = 0;
    while filled < prefix.len() {
        let n = reader.read(&mut prefix[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(PeerError::Io(std::io::Error::from(std::io::ErrorKind::UnexpectedEof)));
        }
        filled += n;
    }

    let length = u32::from_be_bytes(prefix);
    if length == 0 {
        return Ok(Some(PeerMessage::KeepAlive));
    }
    if length > MAX_MESSAGE_LENGTH {
        return Err(PeerError::MessageTooLarge(length));
    }
    let mut payload = vec![0u8; length as usize];
    reader.read_exact(&mut payload).await?;
    PeerMessage::from_bytes(&payload).map(Some)
}

pub async fn write_message<W: AsyncWrite + Unpin>(writer: &mut W, message: &PeerMessage) -> Result<(), PeerError>
{
    let mut bytes = Vec::with_capacity(message.encoded_len());
    message.write(&mut bytes)?;
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_handshake<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Handshake, PeerError>
{
    let mut buffer = [0u8; HANDSHAKE_LENGTH];
    reader.read_exact(&mut buffer).await?;
    Handshake::from_bytes(&buffer)
}

pub async fn write_handshake<W: AsyncWrite + Unpin>(writer: &mut W, handshake: &Handshake) -> Result<(), PeerError>
{
    writer.write_all(&handshake.to_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
