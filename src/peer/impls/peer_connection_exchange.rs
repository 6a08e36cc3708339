use std::sync::atomic::Ordering;
use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, watch};
use crate::common::common::flag_raised;
use crate::config::impls::configuration::MAX_CHUNK_SIZE;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::enums::peer_message::PeerMessage;
use crate::peer::peer::{read_message, write_message};
use crate::peer::structs::peer_connection::PeerConnection;
use crate::peer::structs::pending_piece::PendingPiece;
use crate::torrent::types::PieceBitfield;

pub const MAX_PIECE_FAILURES: u32 = 3;
const INBOUND_BACKLOG: usize = 256;

impl PeerConnection {
    pub(crate) async fn exchange<IO>(
        &self,
        mut reader: ReadHalf<IO>,
        mut writer: WriteHalf<IO>,
        mut shutdown: watch::Receiver<bool>,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<(), PeerError>
    where
        IO: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let (inbound, mut messages) = mpsc::channel::<Result<PeerMessage, PeerError>>(INBOUND_BACKLOG);
        let read_task = tokio::spawn(async move {
            loop {
                match read_message(&mut reader).await {
                    Ok(Some(message)) => {
                        if inbound.send(Ok(message)).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(error) => {
                        let _ = inbound.send(Err(error)).await;
                        break;
                    }
                }
            }
        });

        let mut have = self.torrent.have.subscribe();
        let mut pending: Option<PendingPiece> = None;
        let result = self.exchange_loop(&mut writer, &mut messages, &mut have, &mut pending, &mut shutdown, &mut cancel).await;

        if let Some(piece) = pending.take() {
            self.torrent.unreserve(piece.index);
        }
        read_task.abort();
        let _ = writer.shutdown().await;
        result
    }

    async fn exchange_loop<W>(
        &self,
        writer: &mut W,
        messages: &mut mpsc::Receiver<Result<PeerMessage, PeerError>>,
        have: &mut broadcast::Receiver<u32>,
        pending: &mut Option<PendingPiece>,
        shutdown: &mut watch::Receiver<bool>,
        cancel: &mut watch::Receiver<bool>,
    ) -> Result<(), PeerError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        if self.torrent.bitfield().any() {
            write_message(writer, &PeerMessage::Bitfield(self.torrent.bitfield_bytes())).await?;
        }
        loop {
            tokio::select! {
                message = messages.recv() => match message {
                    Some(Ok(message)) => self.handle_message(message, writer, pending).await?,
                    Some(Err(error)) => return Err(error),
                    None => return Ok(()),
                },
                index = have.recv() => match index {
                    Ok(index) => {
                        if !self.remote_has(index as usize) {
                            write_message(writer, &PeerMessage::Have(index)).await?;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        debug!("[PEER] {} skipped {} have notifications", self.torrent.info_hash, skipped);
                    }
                    Err(RecvError::Closed) => return Ok(()),
                },
                _ = flag_raised(shutdown) => return Ok(()),
                _ = flag_raised(cancel) => return Ok(()),
            }
        }
    }

    async fn handle_message<W>(
        &self,
        message: PeerMessage,
        writer: &mut W,
        pending: &mut Option<PendingPiece>,
    ) -> Result<(), PeerError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let pieces = self.torrent.piece_set.piece_count();
        match message {
            PeerMessage::KeepAlive => Ok(()),
            PeerMessage::Have(index) => {
                if index as usize >= pieces {
                    return Err(PeerError::InvalidPiece(index));
                }
                self.remote_pieces.lock().set(index as usize, true);
                self.request_next(writer, pending).await
            }
            PeerMessage::Bitfield(bytes) => {
                if bytes.len() != pieces.div_ceil(8) {
                    return Err(PeerError::MalformedMessage(format!(
                        "bitfield of {} bytes for {} pieces", bytes.len(), pieces
                    )));
                }
                let mut bits = PieceBitfield::from_vec(bytes);
                bits.truncate(pieces);
                *self.remote_pieces.lock() = bits;
                self.request_next(writer, pending).await
            }
            PeerMessage::Request { index, begin, length } => {
                self.serve_request(writer, index, begin, length).await
            }
            PeerMessage::Piece { index, begin, block } => {
                let complete = match pending.as_mut() {
                    Some(current) if current.index == index as usize => {
                        if !current.add_block(begin, &block)? {
                            return Ok(());
                        }
                        current.is_complete()
                    }
                    _ => return Err(PeerError::UnrequestedBlock { index, begin }),
                };
                self.counters.record_read(block.len() as u64);
                self.torrent.stats.downloaded.fetch_add(block.len() as u64, Ordering::Relaxed);

                if complete {
                    if let Some(piece) = pending.take() {
                        self.finish_piece(piece).await?;
                    }
                    self.request_next(writer, pending).await?;
                }
                Ok(())
            }
        }
    }

    async fn serve_request<W>(&self, writer: &mut W, index: u32, begin: u32, length: u32) -> Result<(), PeerError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let piece = index as usize;
        let Some(size) = self.torrent.piece_set.piece_size(piece) else {
            return Err(PeerError::InvalidPiece(index));
        };
        if length == 0 || length > MAX_CHUNK_SIZE || begin as u64 + length as u64 > size {
            return Err(PeerError::InvalidRequest { index, begin, length });
        }
        if !self.torrent.has_piece(piece) {
            debug!("[PEER] {} request for missing piece {} ignored", self.torrent.info_hash, index);
            return Ok(());
        }

        let block = self.torrent.storage.read_block(piece, begin, length).await.map_err(PeerError::Storage)?;
        write_message(writer, &PeerMessage::Piece { index, begin, block }).await?;
        self.counters.record_written(length as u64);
        self.torrent.stats.uploaded.fetch_add(length as u64, Ordering::Relaxed);
        Ok(())
    }

    async fn finish_piece(&self, piece: PendingPiece) -> Result<(), PeerError> {
        let PendingPiece { index, buffer, .. } = piece;
        if self.torrent.piece_set.verify(index, &buffer) {
            if let Err(error) = self.torrent.storage.write_piece(index, &buffer).await {
                self.torrent.unreserve(index);
                return Err(PeerError::Storage(error));
            }
            self.torrent.piece_completed(index);
            return Ok(());
        }

        self.torrent.piece_failed(index);
        let failures = {
            let mut failures = self.failures.lock();
            *failures += 1;
            *failures
        };
        warn!("[PEER] {} corrupt piece {} ({} so far)", self.torrent.info_hash, index, failures);
        if failures > MAX_PIECE_FAILURES {
            return Err(PeerError::TooManyFailures);
        }
        Ok(())
    }

    /// Requests every chunk of the next missing piece the remote holds. One
    /// piece is in flight at a time.
    async fn request_next<W>(&self, writer: &mut W, pending: &mut Option<PendingPiece>) -> Result<(), PeerError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        if pending.is_some() {
            return Ok(());
        }
        let next = {
            let remote = self.remote_pieces.lock();
            self.torrent.reserve_next(&remote)
        };
        let Some(index) = next else {
            return Ok(());
        };
        let Some(size) = self.torrent.piece_set.piece_size(index) else {
            self.torrent.unreserve(index);
            return Ok(());
        };

        let piece = PendingPiece::new(index, size, self.torrent.chunk_size);
        let chunks = piece.chunks();
        *pending = Some(piece);
        for (begin, length) in chunks {
            write_message(writer, &PeerMessage::Request { index: index as u32, begin, length }).await?;
        }
        Ok(())
    }
}
