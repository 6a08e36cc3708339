//! Status observation bus.
//!
//! Tracker clients and peer connections report lifecycle events through
//! optional channels. An [`Observer`](structs::observer::Observer) is the
//! consumer side's registration: either disabled, in which case emitting is a
//! no-op, or backed by a bounded `tokio::sync::mpsc` channel the consumer reads.
//!
//! Every emitting entity wraps its observer in a
//! [`StatusEmitter`](structs::status_emitter::StatusEmitter). The emitter queues
//! events without blocking and a delivery task, spawned on first use, forwards
//! them in order, waiting on the consumer as long as it takes. A slow consumer
//! therefore only delays the events of the entity it observes.
//!
//! ```text
//!  PeerConnection ──emit──▶ [unbounded queue] ──task──▶ bounded channel ──▶ consumer
//!  TrackerClient  ──emit──▶ [unbounded queue] ──task──▶ bounded channel ──▶ consumer
//! ```

/// Observer, emitter and grouped observer structures.
pub mod structs;

/// Implementation blocks for observers and emitters.
pub mod impls;

/// Unit tests for status delivery.
pub mod tests;
