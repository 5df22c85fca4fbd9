// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board store: the remote authority for board state.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Coordinator │────►│ RemoteBoard │────►│  Transport  │────► lanes-remote
//! │             │◄────│    Store    │◄────│   (trait)   │◄────
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The coordinator only sees the [`BoardStore`] trait, so tests can swap in
//! an in-memory store. The WebSocket implementation sits on the injectable
//! [`Transport`] trait.

mod remote;
mod transport;

pub use remote::{RemoteBoardStore, StoreConfig};
pub use transport::{Transport, TransportError, TransportFuture, TransportResult, WebSocketTransport};

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use lanes_core::{Board, Card, Column};

/// Error type for board store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// No response arrived in time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The store refused the request.
    #[error("rejected by board store: {0}")]
    Rejected(String),

    /// The store answered with the wrong message type.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Max connection attempts exceeded.
    #[error("could not connect after {0} attempt(s)")]
    MaxRetriesExceeded(u32),
}

/// Result type for board store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future returned by [`BoardStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Authoritative persistence for a board, keyed by entity id.
pub trait BoardStore: Send + Sync {
    /// Fetch the full board tree.
    fn fetch_board<'a>(&'a self, board_id: &'a str) -> StoreFuture<'a, Board>;

    /// Move a column to `new_order` and return it as stored.
    fn move_column<'a>(&'a self, column_id: &'a str, new_order: usize) -> StoreFuture<'a, Column>;

    /// Move a card into `new_column_id` at `new_order` and return it as
    /// stored.
    fn move_card<'a>(
        &'a self,
        card_id: &'a str,
        new_column_id: &'a str,
        new_order: usize,
    ) -> StoreFuture<'a, Card>;
}
