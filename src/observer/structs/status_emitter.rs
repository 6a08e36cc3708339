use parking_lot::Mutex;
use tokio::sync::mpsc;

pub struct StatusEmitter<T> {
    pub(crate) target: Option<mpsc::Sender<T>>,
    pub(crate) queue: Mutex<Option<mpsc::UnboundedSender<T>>>,
}
