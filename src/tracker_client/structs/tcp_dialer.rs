#[derive(Debug, Clone, Default)]
pub struct TcpDialer {
    /// `host:port` of an HTTP proxy accepting `CONNECT`.
    pub proxy: Option<String>,
}
