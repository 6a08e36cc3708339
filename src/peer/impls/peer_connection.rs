use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{debug, info};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::watch;
use crate::common::common::flag_raised;
use crate::observer::structs::status_emitter::StatusEmitter;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::enums::peer_state::PeerState;
use crate::peer::peer::{read_handshake, write_handshake};
use crate::peer::structs::handshake::Handshake;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::peer::structs::peer_counters::PeerCounters;
use crate::peer::structs::peer_counters_atomic::PeerCountersAtomic;
use crate::peer::structs::peer_status::PeerStatus;
use crate::torrent::structs::torrent::Torrent;
use crate::torrent::types::PieceBitfield;
use crate::tracker::structs::peer_id::PeerId;

pub const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

impl PeerConnection {
    pub fn new(torrent: Arc<Torrent>, expected_peer_id: Option<PeerId>) -> PeerConnection {
        let pieces = torrent.piece_set.piece_count();
        let status = StatusEmitter::new(&torrent.peer_observer.peer_status);
        PeerConnection {
            torrent,
            expected_peer_id,
            remote_peer_id: Mutex::new(None),
            state: Mutex::new(PeerState::Pending),
            remote_pieces: Mutex::new(PieceBitfield::repeat(false, pieces)),
            counters: PeerCountersAtomic::default(),
            failures: Mutex::new(0),
            status,
            cancel: watch::Sender::new(false),
        }
    }

    pub fn state(&self) -> PeerState {
        *self.state.lock()
    }

    pub fn remote_peer_id(&self) -> Option<PeerId> {
        *self.remote_peer_id.lock()
    }

    pub fn counters(&self) -> PeerCounters {
        self.counters.snapshot()
    }

    pub fn remote_has(&self, index: usize) -> bool {
        self.remote_pieces.lock().get(index).map(|bit| *bit).unwrap_or(false)
    }

    pub fn remote_pieces(&self) -> PieceBitfield {
        self.remote_pieces.lock().clone()
    }

    /// Ends the session; the final status reports a graceful close.
    pub fn close(&self) {
        self.cancel.send_replace(true);
    }

    /// Applies a lifecycle transition and emits its status. Returns `false`
    /// for a transition that is not allowed from the current state.
    pub(crate) fn transition(&self, next: PeerState, err: Option<PeerError>) -> bool {
        let peer_id = self.remote_peer_id();
        let mut state = self.state.lock();
        let status = match (*state, next) {
            (PeerState::Pending, PeerState::Established) => {
                self.torrent.stats.peers_active.fetch_add(1, Ordering::Relaxed);
                PeerStatus::established(peer_id)
            }
            (PeerState::Established, PeerState::Dropped) => {
                self.torrent.stats.peers_active.fetch_sub(1, Ordering::Relaxed);
                PeerStatus::dropped(peer_id, err.map(Arc::new))
            }
            (PeerState::Pending, PeerState::Dropped) => {
                PeerStatus::dropped(peer_id, Some(Arc::new(err.unwrap_or(PeerError::Cancelled))))
            }
            _ => return false,
        };
        *state = next;
        self.status.emit(status);
        true
    }

    /// Drives the session until it ends. Consumes the stream.
    pub async fn run<IO>(self: Arc<Self>, io: IO)
    where
        IO: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let (mut reader, mut writer) = tokio::io::split(io);
        let mut shutdown = self.torrent.shutdown.subscribe();
        let mut cancel = self.cancel.subscribe();

        let handshake = tokio::select! {
            result = tokio::time::timeout(HANDSHAKE_TIMEOUT, self.handshake(&mut reader, &mut writer)) => {
                result.unwrap_or(Err(PeerError::HandshakeTimeout))
            }
            _ = flag_raised(&mut shutdown) => Err(PeerError::Cancelled),
            _ = flag_raised(&mut cancel) => Err(PeerError::Cancelled),
        };

        let remote = match handshake {
            Ok(remote) => remote,
            Err(error) => {
                debug!("[PEER] {} handshake failed: {}", self.torrent.info_hash, error);
                self.transition(PeerState::Dropped, Some(error));
                return;
            }
        };

        *self.remote_peer_id.lock() = Some(remote);
        if !self.transition(PeerState::Established, None) {
            return;
        }
        info!(
            "[PEER] {} established with {} ({})",
            self.torrent.info_hash,
            remote,
            remote.get_client_name().unwrap_or("unknown client")
        );

        let result = self.exchange(reader, writer, shutdown, cancel).await;
        match result {
            Ok(()) => {
                info!("[PEER] {} closed with {}", self.torrent.info_hash, remote);
                self.transition(PeerState::Dropped, None);
            }
            Err(error) => {
                info!("[PEER] {} dropped {}: {}", self.torrent.info_hash, remote, error);
                self.transition(PeerState::Dropped, Some(error));
            }
        }
    }

    async fn handshake<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<PeerId, PeerError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let local = Handshake {
            info_hash: self.torrent.info_hash,
            peer_id: self.torrent.peer_id,
        };
        write_handshake(writer, &local).await?;
        let remote = read_handshake(reader).await?;

        if remote.info_hash != local.info_hash {
            return Err(PeerError::InfoHashMismatch {
                expected: local.info_hash,
                received: remote.info_hash,
            });
        }
        if remote.peer_id == local.peer_id {
            return Err(PeerError::SelfConnection);
        }
        if let Some(expected) = self.expected_peer_id {
            if expected != remote.peer_id {
                return Err(PeerError::PeerIdMismatch {
                    expected,
                    received: remote.peer_id,
                });
            }
        }
        Ok(remote.peer_id)
    }
}
