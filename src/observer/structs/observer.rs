use tokio::sync::mpsc;

#[derive(Debug)]
pub struct Observer<T> {
    pub(crate) sender: Option<mpsc::Sender<T>>,
}
