use std::io;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{broadcast, watch};
use crate::common::common::flag_raised;
use crate::config::impls::configuration::MAX_CHUNK_SIZE;
use crate::metainfo::structs::content_id::ContentId;
use crate::metainfo::structs::piece_set::PieceSet;
use crate::observer::structs::peer_observer::PeerObserver;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::torrent::structs::torrent::Torrent;
use crate::torrent::structs::torrent_state::TorrentState;
use crate::torrent::structs::torrent_stats::TorrentStats;
use crate::torrent::structs::torrent_stats_atomic::TorrentStatsAtomic;
use crate::torrent::traits::piece_storage::PieceStorage;
use crate::torrent::types::PieceBitfield;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker_pool::structs::tracker_client_lease::TrackerClientLease;

const HAVE_BACKLOG: usize = 1024;

impl Torrent {
    pub fn new(
        info_hash: ContentId,
        peer_id: PeerId,
        piece_set: Arc<PieceSet>,
        storage: Arc<dyn PieceStorage>,
        chunk_size: u32,
        peer_observer: PeerObserver,
    ) -> io::Result<Torrent> {
        if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid chunk size {chunk_size}")));
        }
        let pieces = piece_set.piece_count();
        let (have, _) = broadcast::channel(HAVE_BACKLOG);
        Ok(Torrent {
            info_hash,
            peer_id,
            piece_set,
            storage,
            chunk_size,
            state: Mutex::new(TorrentState {
                completed: PieceBitfield::repeat(false, pieces),
                reserved: PieceBitfield::repeat(false, pieces),
                closed: false,
            }),
            stats: TorrentStatsAtomic::default(),
            have,
            complete: watch::Sender::new(pieces == 0),
            shutdown: watch::Sender::new(false),
            peer_observer,
            peers: Mutex::new(Vec::new()),
            leases: Mutex::new(Vec::new()),
        })
    }

    pub fn info_hash(&self) -> ContentId {
        self.info_hash
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn piece_set(&self) -> &Arc<PieceSet> {
        &self.piece_set
    }

    pub fn storage(&self) -> &Arc<dyn PieceStorage> {
        &self.storage
    }

    pub fn stats(&self) -> TorrentStats {
        let completed = self.state.lock().completed.count_ones() as u64;
        self.stats.snapshot(completed)
    }

    pub fn has_piece(&self, index: usize) -> bool {
        self.state.lock().completed.get(index).map(|bit| *bit).unwrap_or(false)
    }

    pub fn bitfield(&self) -> PieceBitfield {
        self.state.lock().completed.clone()
    }

    /// Wire form of the completion bitmap, spare bits zeroed.
    pub fn bitfield_bytes(&self) -> Vec<u8> {
        let state = self.state.lock();
        let mut bytes = vec![0u8; state.completed.len().div_ceil(8)];
        for index in state.completed.iter_ones() {
            bytes[index / 8] |= 0x80 >> (index % 8);
        }
        bytes
    }

    pub fn is_complete(&self) -> bool {
        *self.complete.borrow()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Bytes still missing.
    pub fn left(&self) -> u64 {
        let state = self.state.lock();
        let have: u64 = state.completed.iter_ones()
            .filter_map(|index| self.piece_set.piece_size(index))
            .sum();
        self.piece_set.total_length - have
    }

    /// Reserves the lowest piece that is missing, not reserved by another
    /// connection and held by the remote.
    pub(crate) fn reserve_next(&self, remote: &PieceBitfield) -> Option<usize> {
        let mut state = self.state.lock();
        if state.closed {
            return None;
        }
        let index = (0..state.completed.len()).find(|&index| {
            !state.completed[index]
                && !state.reserved[index]
                && remote.get(index).map(|bit| *bit).unwrap_or(false)
        })?;
        state.reserved.set(index, true);
        Some(index)
    }

    pub(crate) fn unreserve(&self, index: usize) {
        let mut state = self.state.lock();
        if index < state.reserved.len() {
            state.reserved.set(index, false);
        }
    }

    pub(crate) fn piece_completed(&self, index: usize) {
        let all = {
            let mut state = self.state.lock();
            if index >= state.completed.len() || state.completed[index] {
                return;
            }
            state.completed.set(index, true);
            state.reserved.set(index, false);
            state.completed.all()
        };
        debug!("[TORRENT] {} piece {} verified", self.info_hash, index);
        let _ = self.have.send(index as u32);
        if all {
            info!("[TORRENT] {} complete", self.info_hash);
            self.complete.send_replace(true);
        }
    }

    pub(crate) fn piece_failed(&self, index: usize) {
        self.unreserve(index);
        self.stats.pieces_failed.fetch_add(1, Ordering::Relaxed);
        warn!("[TORRENT] {} piece {} failed verification", self.info_hash, index);
    }

    /// Hashes what the storage already holds and marks every matching piece
    /// complete. Returns the number of verified pieces.
    pub async fn verify_existing(&self) -> io::Result<usize> {
        let mut verified = 0;
        for index in 0..self.piece_set.piece_count() {
            let Some(size) = self.piece_set.piece_size(index) else {
                continue;
            };
            let length = u32::try_from(size).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("piece {index} of {size} bytes exceeds block range"))
            })?;
            let data = self.storage.read_block(index, 0, length).await?;
            if self.piece_set.verify(index, &data) {
                self.state.lock().completed.set(index, true);
                verified += 1;
            }
        }
        if verified == self.piece_set.piece_count() {
            self.complete.send_replace(true);
        }
        info!("[TORRENT] {} verified {}/{} pieces from storage", self.info_hash, verified, self.piece_set.piece_count());
        Ok(verified)
    }

    /// Starts a peer session over `io`; the connection runs on its own task.
    pub fn add_peer_conn<IO>(self: &Arc<Self>, io: IO, expected_peer_id: Option<PeerId>) -> Arc<PeerConnection>
    where
        IO: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let conn = Arc::new(PeerConnection::new(self.clone(), expected_peer_id));
        {
            let mut peers = self.peers.lock();
            peers.retain(|peer| peer.strong_count() > 0);
            peers.push(Arc::downgrade(&conn));
        }
        tokio::spawn(conn.clone().run(io));
        conn
    }

    pub fn peers(&self) -> Vec<Arc<PeerConnection>> {
        self.peers.lock().iter().filter_map(|peer| peer.upgrade()).collect()
    }

    /// Resolves once every piece is verified; `false` if the torrent went away first.
    pub async fn wait_complete(&self) -> bool {
        let mut complete = self.complete.subscribe();
        let mut shutdown = self.shutdown.subscribe();
        tokio::select! {
            _ = flag_raised(&mut complete) => self.is_complete(),
            _ = flag_raised(&mut shutdown) => self.is_complete(),
        }
    }

    pub fn announce_request(&self, event: AnnounceEvent) -> AnnounceRequest {
        AnnounceRequest::new(event, self.info_hash, self.peer_id, self.left())
            .with_totals(
                self.stats.uploaded.load(Ordering::Relaxed),
                self.stats.downloaded.load(Ordering::Relaxed),
            )
    }

    pub(crate) fn attach_lease(&self, lease: TrackerClientLease) {
        self.leases.lock().push(lease);
    }

    pub fn tracker_urls(&self) -> Vec<String> {
        self.leases.lock().iter().map(|lease| lease.url().to_string()).collect()
    }

    /// Stops every peer connection and releases the tracker leases. Idempotent.
    pub fn close(&self) {
        {
            let mut state = self.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
        }
        self.shutdown.send_replace(true);
        let leases = std::mem::take(&mut *self.leases.lock());
        for lease in leases {
            if let Err(error) = lease.release() {
                error!("[TORRENT] {} lease release failed: {}", self.info_hash, error);
            }
        }
        info!("[TORRENT] {} closed", self.info_hash);
    }
}
