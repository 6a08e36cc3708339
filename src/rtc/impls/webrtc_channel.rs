use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use webrtc::data::data_channel::{DataChannel, PollDataChannel};
use webrtc::peer_connection::RTCPeerConnection;
use crate::peer::peer::MAX_MESSAGE_LENGTH;
use crate::rtc::structs::webrtc_channel::WebRtcChannel;

/// Largest data channel message this side sends; longer writes are split.
pub const MAX_CHANNEL_MESSAGE: usize = 16 * 1024;
/// Receive buffer for one data channel message, sized for a whole peer frame.
pub const READ_BUFFER_CAPACITY: usize = MAX_MESSAGE_LENGTH as usize + 4;

impl WebRtcChannel {
    pub fn new(raw: Arc<DataChannel>, peer_connection: Arc<RTCPeerConnection>) -> WebRtcChannel {
        let mut stream = PollDataChannel::new(raw);
        stream.set_read_buf_capacity(READ_BUFFER_CAPACITY);
        WebRtcChannel {
            stream,
            peer_connection,
        }
    }
}

impl AsyncRead for WebRtcChannel {
    fn poll_read(mut self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.stream).poll_read(cx, buf)
    }
}

impl AsyncWrite for WebRtcChannel {
    fn poll_write(mut self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        let length = buf.len().min(MAX_CHANNEL_MESSAGE);
        Pin::new(&mut self.stream).poll_write(cx, &buf[..length])
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.stream).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.stream).poll_shutdown(cx)
    }
}

impl Drop for WebRtcChannel {
    fn drop(&mut self) {
        let peer_connection = self.peer_connection.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = peer_connection.close().await;
            });
        }
    }
}
