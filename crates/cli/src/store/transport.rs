// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request/reply link to a board store.
//!
//! A [`Transport`] carries one [`ClientMessage`] at a time and hands back
//! the [`ServerMessage`] that answers it. Correlation by request id lives
//! here, so [`RemoteBoardStore`](super::RemoteBoardStore) only deals in
//! whole exchanges.

use std::future::Future;
use std::pin::Pin;

use futures_util::{SinkExt, StreamExt};
use lanes_core::protocol::{ClientMessage, ServerMessage};
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::debug;

/// Failure of a single exchange with the board store.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("cannot reach board store at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("no open link to the board store")]
    NotOpen,

    #[error("board store closed the link before replying")]
    Closed,

    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by [`Transport`] methods.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// A link that exchanges protocol messages with a board store.
///
/// Any failed exchange leaves the link closed; the caller reopens it.
pub trait Transport: Send + Sync {
    fn open<'a>(&'a mut self, url: &'a str) -> TransportFuture<'a, ()>;

    /// Closes the link. Replies still in flight are discarded.
    fn close(&mut self) -> TransportFuture<'_, ()>;

    /// Sends `request` and waits for the reply carrying the same request
    /// id. Replies to other requests are skipped.
    fn round_trip(&mut self, request: ClientMessage) -> TransportFuture<'_, ServerMessage>;

    fn is_open(&self) -> bool;
}

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// [`Transport`] over a tokio-tungstenite WebSocket.
#[derive(Default)]
pub struct WebSocketTransport {
    ws: Option<WsStream>,
}

impl WebSocketTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for WebSocketTransport {
    fn open<'a>(&'a mut self, url: &'a str) -> TransportFuture<'a, ()> {
        Box::pin(async move {
            let (ws, _) = tokio_tungstenite::connect_async(url).await.map_err(|e| {
                TransportError::Unreachable {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })?;
            self.ws = Some(ws);
            Ok(())
        })
    }

    fn close(&mut self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if let Some(mut ws) = self.ws.take() {
                // The peer may already be gone.
                let _ = ws.close(None).await;
            }
            Ok(())
        })
    }

    fn round_trip(&mut self, request: ClientMessage) -> TransportFuture<'_, ServerMessage> {
        Box::pin(async move {
            let ws = self.ws.as_mut().ok_or(TransportError::NotOpen)?;
            let result = exchange(ws, &request).await;
            if result.is_err() {
                self.ws = None;
            }
            result
        })
    }

    fn is_open(&self) -> bool {
        self.ws.is_some()
    }
}

async fn exchange(ws: &mut WsStream, request: &ClientMessage) -> TransportResult<ServerMessage> {
    let request_id = request.request_id();
    ws.send(Message::Text(request.to_json()?.into())).await?;

    while let Some(frame) = ws.next().await {
        let text = match frame? {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        let reply = ServerMessage::from_json(&text)?;
        if is_reply_to(request, &reply) {
            return Ok(reply);
        }
        debug!(?request_id, "skipping reply to another request: {:?}", reply);
    }
    Err(TransportError::Closed)
}

/// Whether `reply` answers `request`. Pings are matched on their echoed id.
pub(crate) fn is_reply_to(request: &ClientMessage, reply: &ServerMessage) -> bool {
    match (request, reply) {
        (ClientMessage::Ping { id }, ServerMessage::Pong { id: echoed }) => id == echoed,
        _ => request.request_id().is_some() && reply.request_id() == request.request_id(),
    }
}
