use std::io;
use async_trait::async_trait;
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use crate::tracker_client::structs::tcp_dialer::TcpDialer;
use crate::tracker_client::traits::dialer::Dialer;

const MAX_PROXY_RESPONSE: usize = 8192;

impl TcpDialer {
    pub fn new(proxy: Option<String>) -> TcpDialer {
        TcpDialer { proxy }
    }

    async fn connect_via_proxy(proxy: &str, host: &str, port: u16) -> io::Result<TcpStream> {
        debug!("[TRACKER CLIENT] Tunneling to {}:{} via {}", host, port, proxy);
        let mut stream = TcpStream::connect(proxy).await?;
        let authority = if host.contains(':') {
            format!("[{host}]:{port}")
        } else {
            format!("{host}:{port}")
        };
        let request = format!("CONNECT {authority} HTTP/1.1\r\nHost: {authority}\r\n\r\n");
        stream.write_all(request.as_bytes()).await?;

        let mut response = Vec::with_capacity(256);
        let mut byte = [0u8; 1];
        while !response.ends_with(b"\r\n\r\n") {
            if response.len() >= MAX_PROXY_RESPONSE {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "proxy response too large"));
            }
            if stream.read(&mut byte).await? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "proxy closed during CONNECT"));
            }
            response.push(byte[0]);
        }

        let response = String::from_utf8_lossy(&response);
        let status_line = response.lines().next().unwrap_or_default();
        match status_line.split_whitespace().nth(1) {
            Some(code) if code.starts_with('2') => Ok(stream),
            _ => Err(io::Error::new(io::ErrorKind::ConnectionRefused, format!("proxy refused CONNECT: {status_line}"))),
        }
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    async fn dial(&self, host: &str, port: u16) -> io::Result<TcpStream> {
        match &self.proxy {
            None => TcpStream::connect((host, port)).await,
            Some(proxy) => Self::connect_via_proxy(proxy, host, port).await,
        }
    }
}
