// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Holds the authoritative boards and writes them back to the optional
//! data file after every accepted move.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use lanes_core::{starter_board, Board, Card, Column};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Errors reported to clients as rejections.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("board not found: {0}")]
    BoardNotFound(String),

    #[error("moves are disabled on this server")]
    MovesDisabled,

    #[error(transparent)]
    Core(#[from] lanes_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StateError>;

/// Shared server state containing the authoritative boards.
#[derive(Clone)]
pub struct ServerState {
    inner: Arc<ServerStateInner>,
}

struct ServerStateInner {
    /// Boards by id.
    boards: Mutex<BTreeMap<String, Board>>,
    /// Where boards are persisted, if anywhere.
    data_file: Option<PathBuf>,
    /// Refuse every move, for exercising client reverts.
    reject_moves: AtomicBool,
}

impl ServerState {
    /// Creates a state seeded with the starter board.
    pub fn seeded() -> Self {
        Self::with_boards(vec![starter_board(Utc::now())], None)
    }

    /// Loads boards from `data_file`, seeding it with the starter board when
    /// the file does not exist yet.
    pub fn open(data_file: &Path) -> Result<Self> {
        let boards = if data_file.exists() {
            let content = std::fs::read_to_string(data_file)?;
            let boards: Vec<Board> = serde_json::from_str(&content)?;
            info!("Loaded {} board(s) from {}", boards.len(), data_file.display());
            boards
        } else {
            info!("Seeding {} with the starter board", data_file.display());
            vec![starter_board(Utc::now())]
        };
        let state = Self::with_boards(boards, Some(data_file.to_path_buf()));
        Ok(state)
    }

    pub fn with_boards(boards: Vec<Board>, data_file: Option<PathBuf>) -> Self {
        let boards = boards
            .into_iter()
            .map(|mut board| {
                board.sort_by_order();
                (board.id.clone(), board)
            })
            .collect();
        ServerState {
            inner: Arc::new(ServerStateInner {
                boards: Mutex::new(boards),
                data_file,
                reject_moves: AtomicBool::new(false),
            }),
        }
    }

    pub fn set_reject_moves(&self, reject: bool) {
        self.inner.reject_moves.store(reject, Ordering::SeqCst);
    }

    /// Returns a copy of a board.
    pub async fn fetch_board(&self, board_id: &str) -> Result<Board> {
        let boards = self.inner.boards.lock().await;
        boards
            .get(board_id)
            .cloned()
            .ok_or_else(|| StateError::BoardNotFound(board_id.to_string()))
    }

    /// Moves a column and returns it as stored.
    pub async fn move_column(&self, column_id: &str, new_order: usize) -> Result<Column> {
        self.check_moves_allowed()?;
        let mut boards = self.inner.boards.lock().await;
        let board = boards
            .values_mut()
            .find(|b| b.column(column_id).is_some())
            .ok_or_else(|| lanes_core::Error::ColumnNotFound(column_id.to_string()))?;

        let now = Utc::now();
        let mut next = lanes_core::move_column(board, column_id, new_order)?;
        next.updated_at = now;
        let column = next
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| lanes_core::Error::ColumnNotFound(column_id.to_string()))?;
        column.updated_at = now;
        let column = column.clone();
        *board = next;
        debug!("Moved column {} to {}", column_id, column.order);

        self.save(&boards)?;
        Ok(column)
    }

    /// Moves a card and returns it as stored.
    pub async fn move_card(
        &self,
        card_id: &str,
        new_column_id: &str,
        new_order: usize,
    ) -> Result<Card> {
        self.check_moves_allowed()?;
        let mut boards = self.inner.boards.lock().await;
        let board = boards
            .values_mut()
            .find(|b| b.locate_card(card_id).is_some())
            .ok_or_else(|| lanes_core::Error::CardNotFound(card_id.to_string()))?;

        let now = Utc::now();
        let mut next = lanes_core::move_card(board, card_id, new_column_id, new_order)?;
        next.updated_at = now;
        let card = next
            .columns
            .iter_mut()
            .flat_map(|c| c.cards.iter_mut())
            .find(|c| c.id == card_id)
            .ok_or_else(|| lanes_core::Error::CardNotFound(card_id.to_string()))?;
        card.updated_at = now;
        let card = card.clone();
        *board = next;
        debug!("Moved card {} to {}:{}", card_id, card.column_id, card.order);

        self.save(&boards)?;
        Ok(card)
    }

    fn check_moves_allowed(&self) -> Result<()> {
        if self.inner.reject_moves.load(Ordering::SeqCst) {
            return Err(StateError::MovesDisabled);
        }
        Ok(())
    }

    fn save(&self, boards: &BTreeMap<String, Board>) -> Result<()> {
        let Some(path) = &self.inner.data_file else {
            return Ok(());
        };
        let all: Vec<&Board> = boards.values().collect();
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(&all)?)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
