//! Observer, emitter and grouped observer structures.

/// Optional consumer channel for one kind of status event.
pub mod observer;

/// Per-entity, ordered, non-blocking event emitter.
pub mod status_emitter;

/// Status channels of a tracker client.
pub mod tracker_observer;

/// Status channels of a peer connection.
pub mod peer_observer;

/// All observers of a client session.
pub mod client_observers;

/// Receiving ends created by `ClientObservers::channels`.
pub mod observer_receivers;
