use tokio::io::{AsyncRead, AsyncWrite};

pub trait DataChannelIo: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin> DataChannelIo for T {}
