// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for lanes unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use lanes_core::{Board, Card, Column};

use crate::session::{Session, User};
use crate::store::{BoardStore, StoreError, StoreFuture, TransportError};

pub fn ts() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// A timestamp after [`ts`], stamped by [`MockBoardStore`] on moved entities.
pub fn ts_later() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_600, 0).unwrap()
}

/// Board `b1` with columns X `[c1, c2]`, Y `[c3]` and an empty Z.
pub fn sample_board() -> Board {
    Board::new("b1", "Sample", "alice", ts())
        .with_column(
            Column::new("x", "X", 0, ts())
                .with_card(Card::new("c1", "First", 0, ts()))
                .with_card(Card::new("c2", "Second", 1, ts())),
        )
        .with_column(Column::new("y", "Y", 1, ts()).with_card(Card::new("c3", "Third", 0, ts())))
        .with_column(Column::new("z", "Z", 2, ts()))
}

pub fn session() -> Session {
    Session::new(
        User {
            name: "alice".to_string(),
        },
        "b1",
    )
}

pub fn column_ids(board: &Board) -> Vec<&str> {
    board.columns.iter().map(|c| c.id.as_str()).collect()
}

pub fn card_ids<'a>(board: &'a Board, column_id: &str) -> Vec<&'a str> {
    board
        .column(column_id)
        .map(|c| c.cards.iter().map(|card| card.id.as_str()).collect())
        .unwrap_or_default()
}

/// In-memory authoritative board store.
///
/// Moves wait on `gate`, so a test can hold it to keep a persistence
/// request in flight.
pub struct MockBoardStore {
    board: Mutex<Board>,
    fail_moves: AtomicBool,
    fail_fetch: AtomicBool,
    calls: Mutex<Vec<String>>,
    pub gate: tokio::sync::Mutex<()>,
}

impl MockBoardStore {
    pub fn new(board: Board) -> Self {
        MockBoardStore {
            board: Mutex::new(board),
            fail_moves: AtomicBool::new(false),
            fail_fetch: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
            gate: tokio::sync::Mutex::new(()),
        }
    }

    pub fn fail_moves(&self, fail: bool) {
        self.fail_moves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    /// The authoritative board.
    pub fn board(&self) -> Board {
        self.board.lock().unwrap().clone()
    }

    /// Every call made so far, e.g. `"move_card c1 y 1"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn move_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.starts_with("move_")).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl BoardStore for MockBoardStore {
    fn fetch_board<'a>(&'a self, board_id: &'a str) -> StoreFuture<'a, Board> {
        Box::pin(async move {
            self.record(format!("fetch_board {board_id}"));
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(TransportError::Closed.into());
            }
            Ok(self.board())
        })
    }

    fn move_column<'a>(&'a self, column_id: &'a str, new_order: usize) -> StoreFuture<'a, Column> {
        Box::pin(async move {
            self.record(format!("move_column {column_id} {new_order}"));
            let _gate = self.gate.lock().await;
            if self.fail_moves.load(Ordering::SeqCst) {
                return Err(StoreError::Rejected("mock rejection".into()));
            }
            let mut board = self.board.lock().unwrap();
            let mut next = lanes_core::move_column(&board, column_id, new_order)
                .map_err(|e| StoreError::Rejected(e.to_string()))?;
            let column = next
                .columns
                .iter_mut()
                .find(|c| c.id == column_id)
                .ok_or_else(|| StoreError::Rejected(column_id.to_string()))?;
            column.updated_at = ts_later();
            let column = column.clone();
            *board = next;
            Ok(column)
        })
    }

    fn move_card<'a>(
        &'a self,
        card_id: &'a str,
        new_column_id: &'a str,
        new_order: usize,
    ) -> StoreFuture<'a, Card> {
        Box::pin(async move {
            self.record(format!("move_card {card_id} {new_column_id} {new_order}"));
            let _gate = self.gate.lock().await;
            if self.fail_moves.load(Ordering::SeqCst) {
                return Err(StoreError::Rejected("mock rejection".into()));
            }
            let mut board = self.board.lock().unwrap();
            let mut next = lanes_core::move_card(&board, card_id, new_column_id, new_order)
                .map_err(|e| StoreError::Rejected(e.to_string()))?;
            let card = next
                .columns
                .iter_mut()
                .flat_map(|c| c.cards.iter_mut())
                .find(|c| c.id == card_id)
                .ok_or_else(|| StoreError::Rejected(card_id.to_string()))?;
            card.updated_at = ts_later();
            let card = card.clone();
            *board = next;
            Ok(card)
        })
    }
}
