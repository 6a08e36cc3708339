#[cfg(test)]
mod observer_tests {
    use std::time::Duration;
    use crate::observer::structs::observer::Observer;
    use crate::observer::structs::status_emitter::StatusEmitter;

    #[tokio::test]
    async fn test_disabled_emitter_is_noop() {
        let emitter: StatusEmitter<u32> = StatusEmitter::new(&Observer::disabled());
        emitter.emit(1);
        assert!(!emitter.is_enabled());
        assert!(emitter.queue.lock().is_none());
    }

    #[tokio::test]
    async fn test_emitter_preserves_order() {
        let (observer, mut receiver) = Observer::new(1);
        let emitter = StatusEmitter::new(&observer);
        for i in 0..100u32 {
            emitter.emit(i);
        }
        for i in 0..100u32 {
            assert_eq!(receiver.recv().await, Some(i));
        }
    }

    #[tokio::test]
    async fn test_slow_consumer_does_not_block_other_entity() {
        let (slow_observer, _slow_receiver) = Observer::<u32>::new(1);
        let (fast_observer, mut fast_receiver) = Observer::<u32>::new(1);
        let slow = StatusEmitter::new(&slow_observer);
        let fast = StatusEmitter::new(&fast_observer);

        for i in 0..50u32 {
            slow.emit(i);
        }
        fast.emit(7);
        let received = tokio::time::timeout(Duration::from_secs(2), fast_receiver.recv()).await.unwrap();
        assert_eq!(received, Some(7));
    }

    #[tokio::test]
    async fn test_events_delivered_after_emitter_dropped() {
        let (observer, mut receiver) = Observer::new(1);
        {
            let emitter = StatusEmitter::new(&observer);
            emitter.emit("first");
            emitter.emit("last");
        }
        assert_eq!(receiver.recv().await, Some("first"));
        assert_eq!(receiver.recv().await, Some("last"));
    }

    #[test]
    fn test_emit_without_runtime_keeps_every_event() {
        let (observer, mut receiver) = Observer::new(1);
        let emitter = StatusEmitter::new(&observer);
        for i in 0..20u32 {
            emitter.emit(i);
        }
        drop(emitter);
        drop(observer);
        for i in 0..20u32 {
            assert_eq!(receiver.blocking_recv(), Some(i));
        }
        assert_eq!(receiver.blocking_recv(), None);
    }
}
