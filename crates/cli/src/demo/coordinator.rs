// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo coordinator over a locally persisted board.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use lanes_core::order::sort_by_order;
use lanes_core::{plan, starter_board, Board, DragEvent, MoveRequest, Plan, SkipReason};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::storage::LocalStorage;
use crate::error::{Error, Result};
use crate::snapshot::SnapshotStore;

/// Storage key of the persisted demo board.
pub const DEMO_BOARD_KEY: &str = "kanban-demo-board";

/// Storage key of the pending undo, so it survives between invocations.
const DEMO_UNDO_KEY: &str = "kanban-demo-undo";

/// Where a card came from before its last cross-column move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoSlot {
    pub card_id: String,
    pub column_id: String,
    pub index: usize,
}

/// Result of a demo drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    Skipped(SkipReason),
    Applied(MoveRequest),
}

/// Applies drags to a board persisted in `L`.
pub struct DemoCoordinator<L: LocalStorage> {
    storage: L,
    snapshot: SnapshotStore,
    undo: Mutex<Option<UndoSlot>>,
}

impl<L: LocalStorage> DemoCoordinator<L> {
    /// Loads the stored board, falling back to the starter board when
    /// nothing usable is stored.
    pub fn open(storage: L) -> Result<Self> {
        let board = match storage.get(DEMO_BOARD_KEY)? {
            Some(json) => match serde_json::from_str::<Board>(&json) {
                Ok(board) => board,
                Err(e) => {
                    warn!("stored demo board is unreadable, starting over: {}", e);
                    starter_board(Utc::now())
                }
            },
            None => {
                debug!("no stored demo board, using the starter board");
                starter_board(Utc::now())
            }
        };
        let undo = match storage.get(DEMO_UNDO_KEY)? {
            Some(json) => match serde_json::from_str::<UndoSlot>(&json) {
                Ok(slot) => Some(slot),
                Err(e) => {
                    warn!("stored demo undo is unreadable, dropping it: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(DemoCoordinator {
            storage,
            snapshot: SnapshotStore::new(board),
            undo: Mutex::new(undo),
        })
    }

    /// The current board.
    pub fn board(&self) -> Arc<Board> {
        self.snapshot.get()
    }

    pub fn snapshot(&self) -> &SnapshotStore {
        &self.snapshot
    }

    /// The pending undo, if the last move was a cross-column card move.
    pub fn undo_slot(&self) -> Option<UndoSlot> {
        self.undo.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Handles the end of a drag gesture.
    pub fn on_drag_end(&self, event: &DragEvent) -> Result<DemoOutcome> {
        let current = self.snapshot.get();
        let (next, request) = match plan(&current, event) {
            Plan::Skip(reason) => {
                debug!(draggable = %event.draggable_id, %reason, "drag skipped");
                return Ok(DemoOutcome::Skipped(reason));
            }
            Plan::Apply { next, request } => (next, request),
        };

        let slot = match &request {
            MoveRequest::Card {
                card_id,
                from_column_id,
                new_column_id,
                ..
            } if from_column_id != new_column_id => {
                original_index(&current, from_column_id, card_id).map(|index| UndoSlot {
                    card_id: card_id.clone(),
                    column_id: from_column_id.clone(),
                    index,
                })
            }
            _ => None,
        };

        let next = self.persist(next)?;
        self.snapshot.replace(next);
        self.set_undo(slot)?;
        info!(%request, "demo move applied");
        Ok(DemoOutcome::Applied(request))
    }

    /// Moves the last cross-column card back to where it came from.
    ///
    /// Returns the move performed, or `None` when there is nothing to undo.
    pub fn undo(&self) -> Result<Option<MoveRequest>> {
        let Some(slot) = self.undo_slot() else {
            return Ok(None);
        };
        let current = self.snapshot.get();
        let (from, _) = current
            .locate_card(&slot.card_id)
            .ok_or_else(|| Error::CardNotFound(slot.card_id.clone()))?;
        let request = MoveRequest::Card {
            card_id: slot.card_id.clone(),
            from_column_id: from.id.clone(),
            new_column_id: slot.column_id.clone(),
            new_order: slot.index,
        };

        let next = lanes_core::move_card(&current, &slot.card_id, &slot.column_id, slot.index)?;
        let next = self.persist(next)?;
        self.snapshot.replace(next);
        self.set_undo(None)?;
        info!(%request, "demo move undone");
        Ok(Some(request))
    }

    /// Restores the starter board and forgets the stored one.
    pub fn reset(&self) -> Result<()> {
        self.storage.remove(DEMO_BOARD_KEY)?;
        self.set_undo(None)?;
        self.snapshot.replace(starter_board(Utc::now()));
        info!("demo board reset");
        Ok(())
    }

    /// Writes `next` to storage, handing it back for publication. The
    /// snapshot must not move ahead of what is stored.
    fn persist(&self, mut next: Board) -> Result<Board> {
        next.sort_by_order();
        let json = serde_json::to_string(&next)?;
        self.storage.set(DEMO_BOARD_KEY, &json).map_err(|e| {
            warn!("failed to persist demo board: {}", e);
            Error::from(e)
        })?;
        Ok(next)
    }

    /// Records the pending undo. The in-memory slot follows the board that
    /// was just published even if the stored slot cannot be updated.
    fn set_undo(&self, slot: Option<UndoSlot>) -> Result<()> {
        let stored = match &slot {
            Some(slot) => serde_json::to_string(slot)
                .map_err(Error::from)
                .and_then(|json| Ok(self.storage.set(DEMO_UNDO_KEY, &json)?)),
            None => self.storage.remove(DEMO_UNDO_KEY).map_err(Error::from),
        };
        *self.undo.lock().unwrap_or_else(|e| e.into_inner()) = slot;
        stored.map_err(|e| {
            warn!("failed to persist demo undo: {}", e);
            e
        })
    }
}

/// Position of `card_id` within the order-sorted cards of `column_id`.
fn original_index(board: &Board, column_id: &str, card_id: &str) -> Option<usize> {
    let column = board.column(column_id)?;
    sort_by_order(&column.cards)
        .iter()
        .position(|c| c.id == card_id)
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
