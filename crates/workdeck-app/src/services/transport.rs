//! Session transport: outbound event channel and the writer task behind it
//!
//! [`ChannelTransport`] is what the card sees. It never blocks: events are
//! pushed onto a bounded channel drained by [`spawn_session_writer`], which
//! owns the WebSocket connection, reconnects with exponential backoff, and
//! replays events queued while disconnected.

use std::collections::VecDeque;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};
use workdeck_core::prelude::*;
use workdeck_core::ClientEvent;

use super::Transport;

/// Capacity of the card → writer channel
pub const SESSION_CHANNEL_CAPACITY: usize = 64;

/// Events kept while the session is unreachable; oldest dropped first
pub const MAX_PENDING_EVENTS: usize = 64;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// [`Transport`] that hands events to the session writer task
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelTransport {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }

    /// Create a transport and the receiving end for [`spawn_session_writer`]
    pub fn channel() -> (Self, mpsc::Receiver<ClientEvent>) {
        let (tx, rx) = mpsc::channel(SESSION_CHANNEL_CAPACITY);
        (Self::new(tx), rx)
    }
}

impl Transport for ChannelTransport {
    fn send(&self, event: &ClientEvent) {
        if let Err(err) = self.tx.try_send(event.clone()) {
            warn!("Session channel full or closed, dropping event: {}", err);
        }
    }
}

/// Spawn the task that delivers events to the agent session.
///
/// With `url == None` the task runs offline and only logs what it receives.
/// The task ends when `shutdown_rx` flips to `true` or every sender is gone.
pub fn spawn_session_writer(
    url: Option<String>,
    rx: mpsc::Receiver<ClientEvent>,
    shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match url {
            Some(url) => run_ws_writer(url, rx, shutdown_rx).await,
            None => run_offline_writer(rx, shutdown_rx).await,
        }
    })
}

async fn run_offline_writer(
    mut rx: mpsc::Receiver<ClientEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    info!("No session URL configured, outbound events will only be logged");
    loop {
        // Buffered events are handled before shutdown
        tokio::select! {
            biased;
            event = rx.recv() => match event {
                Some(event) => info!(
                    target: "workdeck::session",
                    chars = event.args.content.len(),
                    timestamp = %event.args.timestamp,
                    "offline: event not delivered"
                ),
                None => return,
            },
            _ = shutdown_rx.changed() => return,
        }
    }
}

/// Outcome of one connected period
enum Disconnect {
    /// Connection lost, reconnect
    Lost,
    /// Shutdown requested or channel closed, stop
    Stop,
}

async fn run_ws_writer(
    url: String,
    mut rx: mpsc::Receiver<ClientEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut pending: VecDeque<ClientEvent> = VecDeque::new();
    let mut attempt: u32 = 0;

    loop {
        match connect_ws(&url).await {
            Ok(ws) => {
                info!("Connected to session at {}", url);
                attempt = 0;
                match drive_connection(ws, &mut rx, &mut shutdown_rx, &mut pending).await {
                    Disconnect::Stop => return,
                    Disconnect::Lost => warn!("Session connection lost, reconnecting"),
                }
            }
            Err(err) => warn!("{}", err),
        }

        attempt = attempt.saturating_add(1);
        let delay = compute_backoff(attempt);
        debug!("Session reconnect attempt {} in {:?}", attempt, delay);

        // Keep accepting events while we wait
        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                _ = &mut sleep => break,
                _ = shutdown_rx.changed() => return,
                event = rx.recv() => match event {
                    Some(event) => queue_pending(&mut pending, event),
                    None => return,
                },
            }
        }
    }
}

async fn drive_connection(
    mut ws: WsStream,
    rx: &mut mpsc::Receiver<ClientEvent>,
    shutdown_rx: &mut watch::Receiver<bool>,
    pending: &mut VecDeque<ClientEvent>,
) -> Disconnect {
    // Replay what was queued while offline
    while let Some(event) = pending.pop_front() {
        if let Err(err) = write_event(&mut ws, &event).await {
            warn!("Failed to replay queued event: {}", err);
            pending.push_front(event);
            return Disconnect::Lost;
        }
    }

    loop {
        // Drain the channel before honouring shutdown so a push made just
        // before quitting still reaches the session
        tokio::select! {
            biased;
            event = rx.recv() => {
                let Some(event) = event else {
                    let _ = ws.close(None).await;
                    return Disconnect::Stop;
                };
                if let Err(err) = write_event(&mut ws, &event).await {
                    warn!("Failed to send event: {}", err);
                    queue_pending(pending, event);
                    return Disconnect::Lost;
                }
            }
            _ = shutdown_rx.changed() => {
                let _ = ws.close(None).await;
                return Disconnect::Stop;
            }
            incoming = ws.next() => match incoming {
                Some(Ok(WsMessage::Close(_))) | None => return Disconnect::Lost,
                Some(Ok(WsMessage::Text(text))) => {
                    debug!("Session: ignoring inbound frame ({} bytes)", text.len());
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    warn!("Session read error: {}", err);
                    return Disconnect::Lost;
                }
            },
        }
    }
}

async fn write_event(ws: &mut WsStream, event: &ClientEvent) -> Result<()> {
    let json = event.to_json()?;
    ws.send(WsMessage::Text(json.into()))
        .await
        .map_err(|err| Error::transport(format!("write failed: {err}")))
}

fn queue_pending(pending: &mut VecDeque<ClientEvent>, event: ClientEvent) {
    if pending.len() >= MAX_PENDING_EVENTS {
        warn!("Session offline queue full, dropping oldest event");
        pending.pop_front();
    }
    pending.push_back(event);
}

/// Establish a new WebSocket connection to `url`.
async fn connect_ws(url: &str) -> Result<WsStream> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|err| Error::transport(format!("Failed to connect to {url}: {err}")))?;
    Ok(ws_stream)
}

/// Compute exponential backoff duration for reconnection attempt `n`.
///
/// The formula is `INITIAL_BACKOFF * 2^(n-1)`, capped at `MAX_BACKOFF`.
pub fn compute_backoff(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1);
    let multiplier: u64 = 1u64.checked_shl(exponent).unwrap_or(u64::MAX);
    let secs = INITIAL_BACKOFF.as_secs().saturating_mul(multiplier);
    Duration::from_secs(secs.min(MAX_BACKOFF.as_secs()))
}
