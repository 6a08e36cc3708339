use tokio::sync::mpsc;
use crate::observer::structs::observer::Observer;

impl<T> Observer<T> {
    pub fn disabled() -> Observer<T> {
        Observer { sender: None }
    }

    pub fn new(capacity: usize) -> (Observer<T>, mpsc::Receiver<T>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Observer { sender: Some(sender) }, receiver)
    }

    pub fn from_sender(sender: mpsc::Sender<T>) -> Observer<T> {
        Observer { sender: Some(sender) }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Observer { sender: self.sender.clone() }
    }
}

impl<T> Default for Observer<T> {
    fn default() -> Self {
        Self::disabled()
    }
}
