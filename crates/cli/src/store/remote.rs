// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board store backed by a lanes-remote server.
//!
//! Requests are serialized over a single link. The link is opened lazily
//! with exponential backoff and closed after any failed exchange or
//! timeout, so the next request reconnects.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lanes_core::protocol::{ClientMessage, ServerMessage};
use lanes_core::{Board, Card, Column};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::transport::{Transport, WebSocketTransport};
use super::{BoardStore, StoreError, StoreFuture, StoreResult};

/// Configuration for the remote board store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// URL of the remote server.
    pub url: String,
    /// Maximum connection attempts.
    pub max_retries: u32,
    /// Maximum delay between connection attempts (seconds).
    pub max_delay_secs: u64,
    /// Initial delay for exponential backoff (milliseconds).
    pub initial_delay_ms: u64,
    /// How long to wait for the response to one request.
    pub request_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            url: "ws://localhost:7890".to_string(),
            max_retries: 10,
            max_delay_secs: 30,
            initial_delay_ms: 100,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// [`BoardStore`] speaking the lanes wire protocol.
pub struct RemoteBoardStore<T: Transport = WebSocketTransport> {
    config: StoreConfig,
    transport: Mutex<T>,
    next_request_id: AtomicU64,
}

impl RemoteBoardStore<WebSocketTransport> {
    /// Create a store with the default WebSocket transport.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_transport(config, WebSocketTransport::new())
    }
}

impl<T: Transport> RemoteBoardStore<T> {
    /// Create a store with a custom transport (for testing).
    pub fn with_transport(config: StoreConfig, transport: T) -> Self {
        RemoteBoardStore {
            config,
            transport: Mutex::new(transport),
            next_request_id: AtomicU64::new(1),
        }
    }

    /// Open the link with exponential backoff.
    async fn open_with_retry(&self, transport: &mut T) -> StoreResult<()> {
        let mut attempt = 0;
        let mut delay_ms = self.config.initial_delay_ms;

        loop {
            attempt += 1;
            match transport.open(&self.config.url).await {
                Ok(()) => {
                    debug!(url = %self.config.url, attempt, "connected to board store");
                    return Ok(());
                }
                Err(e) if attempt >= self.config.max_retries => {
                    warn!(url = %self.config.url, attempt, "giving up on board store: {}", e);
                    return Err(StoreError::MaxRetriesExceeded(attempt));
                }
                Err(e) => {
                    debug!(attempt, delay_ms, "connect failed: {}", e);
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    delay_ms = std::cmp::min(delay_ms * 2, self.config.max_delay_secs * 1000);
                }
            }
        }
    }

    /// Send one request and wait for its reply.
    async fn request(&self, build: impl FnOnce(u64) -> ClientMessage) -> StoreResult<ServerMessage> {
        let msg = build(self.next_request_id.fetch_add(1, Ordering::Relaxed));

        let mut transport = self.transport.lock().await;
        if !transport.is_open() {
            self.open_with_retry(&mut transport).await?;
        }

        let timeout = self.config.request_timeout;
        let reply = match tokio::time::timeout(timeout, transport.round_trip(msg)).await {
            Ok(reply) => reply.map_err(StoreError::from),
            Err(_) => {
                // A late reply would be mistaken for the next one; start over
                // on a fresh link.
                let _ = transport.close().await;
                Err(StoreError::Timeout(timeout))
            }
        };

        match reply? {
            ServerMessage::Rejected { reason, .. } => Err(StoreError::Rejected(reason)),
            reply => Ok(reply),
        }
    }
}

fn unexpected(expected: &str, got: &ServerMessage) -> StoreError {
    StoreError::UnexpectedResponse(format!("expected {expected}, got {got:?}"))
}

impl<T: Transport> BoardStore for RemoteBoardStore<T> {
    fn fetch_board<'a>(&'a self, board_id: &'a str) -> StoreFuture<'a, Board> {
        Box::pin(async move {
            match self
                .request(|id| ClientMessage::fetch_board(id, board_id))
                .await?
            {
                ServerMessage::Board { board, .. } => Ok(board),
                other => Err(unexpected("board", &other)),
            }
        })
    }

    fn move_column<'a>(&'a self, column_id: &'a str, new_order: usize) -> StoreFuture<'a, Column> {
        Box::pin(async move {
            let reply = self
                .request(|request_id| ClientMessage::MoveColumn {
                    request_id,
                    column_id: column_id.to_string(),
                    new_order,
                })
                .await?;
            match reply {
                ServerMessage::Column { column, .. } => Ok(column),
                other => Err(unexpected("column", &other)),
            }
        })
    }

    fn move_card<'a>(
        &'a self,
        card_id: &'a str,
        new_column_id: &'a str,
        new_order: usize,
    ) -> StoreFuture<'a, Card> {
        Box::pin(async move {
            let reply = self
                .request(|request_id| ClientMessage::MoveCard {
                    request_id,
                    card_id: card_id.to_string(),
                    new_column_id: new_column_id.to_string(),
                    new_order,
                })
                .await?;
            match reply {
                ServerMessage::Card { card, .. } => Ok(card),
                other => Err(unexpected("card", &other)),
            }
        })
    }
}
