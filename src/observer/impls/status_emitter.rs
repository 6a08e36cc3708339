use log::debug;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::observer::structs::observer::Observer;
use crate::observer::structs::status_emitter::StatusEmitter;

impl<T: Send + 'static> StatusEmitter<T> {
    pub fn new(observer: &Observer<T>) -> StatusEmitter<T> {
        StatusEmitter {
            target: observer.sender.clone(),
            queue: Mutex::new(None),
        }
    }

    pub fn disabled() -> StatusEmitter<T> {
        StatusEmitter {
            target: None,
            queue: Mutex::new(None),
        }
    }

    /// Queues `event` for delivery. Never blocks and never waits on the consumer.
    pub fn emit(&self, event: T) {
        let Some(target) = &self.target else {
            return;
        };

        let mut queue = self.queue.lock();
        if queue.is_none() {
            let (sender, mut receiver) = mpsc::unbounded_channel::<T>();
            let target = target.clone();
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move {
                        while let Some(event) = receiver.recv().await {
                            if target.send(event).await.is_err() {
                                debug!("[OBSERVER] Consumer went away, stopping delivery");
                                break;
                            }
                        }
                    });
                }
                Err(_) => {
                    std::thread::spawn(move || {
                        while let Some(event) = receiver.blocking_recv() {
                            if target.blocking_send(event).is_err() {
                                debug!("[OBSERVER] Consumer went away, stopping delivery");
                                break;
                            }
                        }
                    });
                }
            }
            *queue = Some(sender);
        }
        if let Some(sender) = queue.as_ref() {
            let _ = sender.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }
}
