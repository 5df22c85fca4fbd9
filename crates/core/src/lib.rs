// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lanes-core: Shared library for the lanes kanban board
//!
//! This crate provides the board data model, the pure ordering engine,
//! drag-event planning, the starter board, and the wire protocol used by
//! both the `lanes` CLI and the `lanes-remote` board store.

pub mod board;
pub mod drag;
pub mod error;
pub mod order;
pub mod plan;
pub mod protocol;
pub mod seed;

#[cfg(test)]
mod test_helpers;

pub use board::{Board, Card, Column};
pub use drag::{DragEvent, DragKind, Location};
pub use error::{Error, Result};
pub use order::{move_card, move_column, reorder_cards, reorder_columns, CardReorder, CardSlice, CardTarget};
pub use plan::{plan, MoveRequest, Plan, SkipReason};
pub use seed::{starter_board, STARTER_BOARD_ID};
