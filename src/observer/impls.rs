//! Implementation blocks for observers and emitters.

/// Observer implementation: construction, Clone, Default.
pub mod observer;

/// StatusEmitter implementation: ordered delivery via a lazily spawned task.
pub mod status_emitter;

/// ClientObservers implementation: channel bundle creation.
pub mod client_observers;
