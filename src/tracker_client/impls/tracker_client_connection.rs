use std::sync::Arc;
use std::time::Duration;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::{timeout, Instant};
use tokio_tungstenite::{client_async_tls_with_config, MaybeTlsStream, WebSocketStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::{HeaderName, HeaderValue};
use crate::tracker_client::enums::signaling_state::SignalingState;
use crate::tracker_client::enums::tracker_client_error::TrackerClientError;
use crate::tracker_client::structs::tracker_client::TrackerClient;
use crate::tracker_client::structs::tracker_client_state::OutboundFrame;
use crate::tracker_client::structs::tracker_status::TrackerStatus;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const CLOSE_FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

impl TrackerClient {
    pub(crate) async fn run(self: Arc<Self>) -> Result<(), Arc<TrackerClientError>> {
        let mut shutdown = self.shutdown.subscribe();
        if *shutdown.borrow_and_update() {
            return Ok(());
        }

        self.state.lock().signaling = SignalingState::Connecting;
        info!("[TRACKER CLIENT] Connecting to {}", self.url);

        let connected = tokio::select! {
            result = self.connect() => result,
            _ = shutdown.changed() => Err(TrackerClientError::Closed),
        };
        let stream = match connected {
            Ok(stream) => stream,
            Err(error) => {
                self.state.lock().signaling = SignalingState::Disconnected;
                let clean = matches!(error, TrackerClientError::Closed);
                let error = Arc::new(error);
                self.emit_conn_status(TrackerStatus::failed(&self.url, error.clone()));
                return if clean { Ok(()) } else { Err(error) };
            }
        };

        let (mut write, mut read) = stream.split();
        let (writer, mut outbound) = mpsc::unbounded_channel::<OutboundFrame>();
        let write_handle = tokio::spawn(async move {
            while let Some((message, written)) = outbound.recv().await {
                let closing = matches!(message, Message::Close(_));
                let result = write.send(message).await;
                if let Some(written) = written {
                    let _ = written.send(result.is_ok());
                }
                if result.is_err() || closing {
                    break;
                }
            }
        });

        let due = {
            let mut state = self.state.lock();
            if state.closed {
                None
            } else {
                state.signaling = SignalingState::Connected;
                state.writer = Some(writer.clone());
                let now = Instant::now();
                let mut due = Vec::new();
                for (info_hash, slot) in state.announced.iter_mut() {
                    if slot.next_announce.is_some_and(|at| at <= now) {
                        slot.next_announce = None;
                        due.push(*info_hash);
                    }
                }
                Some(due)
            }
        };
        let Some(due) = due else {
            let _ = writer.send((Message::Close(None), None));
            drop(writer);
            let _ = timeout(CLOSE_FLUSH_TIMEOUT, write_handle).await;
            self.emit_conn_status(TrackerStatus::failed(&self.url, Arc::new(TrackerClientError::Closed)));
            return Ok(());
        };

        info!("[TRACKER CLIENT] Connected to {}", self.url);
        self.emit_conn_status(TrackerStatus::connected(&self.url));
        for info_hash in due {
            self.schedule_announce(info_hash);
        }

        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        let result = loop {
            tokio::select! {
                message = read.next() => match message {
                    Some(Ok(Message::Text(text))) => self.handle_message(text.as_str()),
                    Some(Ok(Message::Binary(_))) => debug!("[TRACKER CLIENT] {} ignoring binary frame", self.url),
                    Some(Ok(Message::Close(frame))) => {
                        break Err(TrackerClientError::ConnectionLost(
                            frame.map(|frame| frame.reason.as_str().to_string()).unwrap_or_else(|| String::from("closed by tracker"))
                        ));
                    }
                    Some(Ok(_)) => {}
                    Some(Err(error)) => break Err(TrackerClientError::Transport(error)),
                    None => break Err(TrackerClientError::ConnectionLost(String::from("stream ended"))),
                },
                _ = ticker.tick() => self.announce_due(),
                _ = shutdown.changed() => break Ok(()),
            }
        };

        let negotiations = {
            let mut state = self.state.lock();
            state.signaling = SignalingState::Disconnected;
            state.writer = None;
            state.outbound_offers.clear();
            state.negotiations.drain().flat_map(|(_, handles)| handles).collect::<Vec<_>>()
        };
        for handle in negotiations {
            handle.abort();
        }

        match result {
            Ok(()) => {
                let _ = writer.send((Message::Close(None), None));
                drop(writer);
                let _ = timeout(CLOSE_FLUSH_TIMEOUT, write_handle).await;
                Ok(())
            }
            Err(error) => {
                warn!("[TRACKER CLIENT] {} connection ended: {}", self.url, error);
                write_handle.abort();
                Err(Arc::new(error))
            }
        }
    }

    async fn connect(&self) -> Result<WebSocketStream<MaybeTlsStream<TcpStream>>, TrackerClientError> {
        let mut request = self.url.as_str()
            .into_client_request()
            .map_err(|_| TrackerClientError::InvalidUrl(self.url.clone()))?;
        for (name, value) in &self.settings.http_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TrackerClientError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TrackerClientError::InvalidHeader(name.clone()))?;
            request.headers_mut().insert(header_name, header_value);
        }

        let host = request.uri().host()
            .map(|host| host.trim_start_matches('[').trim_end_matches(']').to_string())
            .ok_or_else(|| TrackerClientError::InvalidUrl(self.url.clone()))?;
        let port = match (request.uri().port_u16(), request.uri().scheme_str()) {
            (Some(port), _) => port,
            (None, Some("wss")) => 443,
            (None, Some("ws")) => 80,
            _ => return Err(TrackerClientError::InvalidUrl(self.url.clone())),
        };

        let handshake_timeout = self.settings.handshake_timeout;
        let handshake = async {
            let stream = self.settings.dialer.dial(&host, port).await?;
            let (stream, _response) = client_async_tls_with_config(request, stream, None, None)
                .await
                .map_err(TrackerClientError::Handshake)?;
            Ok::<_, TrackerClientError>(stream)
        };
        match timeout(handshake_timeout, handshake).await {
            Ok(result) => result,
            Err(_) => Err(TrackerClientError::HandshakeTimeout(handshake_timeout)),
        }
    }

    fn announce_due(self: &Arc<Self>) {
        let due = {
            let mut state = self.state.lock();
            if state.signaling != SignalingState::Connected {
                return;
            }
            let now = Instant::now();
            let mut due = Vec::new();
            for (info_hash, slot) in state.announced.iter_mut() {
                if slot.next_announce.is_some_and(|at| at <= now) {
                    slot.next_announce = None;
                    due.push(*info_hash);
                }
            }
            due
        };
        for info_hash in due {
            self.schedule_announce(info_hash);
        }
    }
}
