// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The in-memory board snapshot that the shell renders from.
//!
//! A [`SnapshotStore`] is the single source of truth for rendering. Writes
//! are whole-board replacements (last write wins); readers get an
//! `Arc<Board>` that never changes underneath them. In remote-backed mode
//! every write also lands in a [`QueryCache`] keyed by board id.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use lanes_core::Board;
use tokio::sync::watch;

/// Fetched boards keyed by board id.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<String, Arc<Board>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, board_id: &str) -> Option<Arc<Board>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(board_id).cloned()
    }

    pub fn put(&self, board: Arc<Board>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(board.id.clone(), board);
    }

    /// Drops the cached board, returning whether one was present.
    pub fn invalidate(&self, board_id: &str) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(board_id).is_some()
    }
}

/// Shared handle to the current board snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    tx: watch::Sender<Arc<Board>>,
    cache: Option<QueryCache>,
    /// Raised when the snapshot may disagree with the store and a
    /// re-fetch could not confirm it.
    stale: AtomicBool,
}

impl SnapshotStore {
    /// A snapshot with no query cache behind it.
    pub fn new(board: Board) -> Self {
        Self::build(board, None)
    }

    /// A snapshot that writes through to `cache`.
    pub fn with_cache(board: Board, cache: QueryCache) -> Self {
        Self::build(board, Some(cache))
    }

    fn build(mut board: Board, cache: Option<QueryCache>) -> Self {
        board.sort_by_order();
        let board = Arc::new(board);
        if let Some(cache) = &cache {
            cache.put(Arc::clone(&board));
        }
        let (tx, _) = watch::channel(board);
        SnapshotStore {
            inner: Arc::new(Inner {
                tx,
                cache,
                stale: AtomicBool::new(false),
            }),
        }
    }

    /// The current board.
    pub fn get(&self) -> Arc<Board> {
        Arc::clone(&self.inner.tx.borrow())
    }

    /// Overwrites the board. Columns and cards are sorted by `order`.
    ///
    /// The cache write happens under the channel lock, so concurrent
    /// writers leave the cache and the snapshot on the same board.
    pub fn replace(&self, mut next: Board) {
        next.sort_by_order();
        let next = Arc::new(next);
        self.inner.tx.send_modify(|current| {
            self.write_through(&next);
            *current = next;
        });
    }

    /// Applies `f` to a copy of the latest board and publishes the result
    /// if `f` returns true. Returns whether anything was published.
    ///
    /// The read and the write happen under one lock, so `f` always sees
    /// the most recent replacement.
    pub fn modify<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut Board) -> bool,
    {
        self.inner.tx.send_if_modified(|current| {
            let mut board = Board::clone(current);
            if !f(&mut board) {
                return false;
            }
            board.sort_by_order();
            let board = Arc::new(board);
            self.write_through(&board);
            *current = board;
            true
        })
    }

    /// A receiver that observes every replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.inner.tx.subscribe()
    }

    pub fn is_stale(&self) -> bool {
        self.inner.stale.load(Ordering::SeqCst)
    }

    pub fn mark_stale(&self) {
        self.inner.stale.store(true, Ordering::SeqCst);
    }

    pub fn clear_stale(&self) {
        self.inner.stale.store(false, Ordering::SeqCst);
    }

    fn write_through(&self, board: &Arc<Board>) {
        if let Some(cache) = &self.inner.cache {
            cache.put(Arc::clone(board));
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
