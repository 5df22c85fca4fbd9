// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns a drag-end event into the next board and the persistence request
//! that makes it durable.
//!
//! Planning is pure: it reads a board snapshot and never mutates it.
//! Malformed events are not errors here; they produce [`Plan::Skip`] with
//! a reason so the caller can log it and move on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::drag::{DragEvent, DragKind, Location};
use crate::error::Error;
use crate::order::{reorder_cards, reorder_columns, sort_by_order, with_cards, CardSlice, CardTarget};

/// A move to be applied by a board store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveRequest {
    Column {
        column_id: String,
        new_order: usize,
    },
    Card {
        card_id: String,
        /// Column the card was dragged out of.
        from_column_id: String,
        new_column_id: String,
        new_order: usize,
    },
}

impl MoveRequest {
    /// True for a card moved into a different column.
    pub fn is_cross_column(&self) -> bool {
        match self {
            MoveRequest::Column { .. } => false,
            MoveRequest::Card {
                from_column_id,
                new_column_id,
                ..
            } => from_column_id != new_column_id,
        }
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRequest::Column {
                column_id,
                new_order,
            } => write!(f, "move column {column_id} to {new_order}"),
            MoveRequest::Card {
                card_id,
                new_column_id,
                new_order,
                ..
            } => write!(f, "move card {card_id} to {new_column_id}:{new_order}"),
        }
    }
}

/// Why a drag event produced no change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Released outside any droppable.
    NoDestination,
    /// Dropped back where it started, or clamped onto its own slot.
    Unchanged,
    UnknownColumn(String),
    UnknownCard(String),
    /// The draggable id does not match the item at the source index.
    DraggableMismatch { expected: String, found: String },
    IndexOutOfRange { index: usize, len: usize },
    /// Rejected by the ordering engine for any other reason.
    Invalid(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoDestination => f.write_str("dropped outside the board"),
            SkipReason::Unchanged => f.write_str("position unchanged"),
            SkipReason::UnknownColumn(id) => write!(f, "unknown column: {id}"),
            SkipReason::UnknownCard(id) => write!(f, "unknown card: {id}"),
            SkipReason::DraggableMismatch { expected, found } => {
                write!(f, "dragged {found} but {expected} sits at the source index")
            }
            SkipReason::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} item(s)")
            }
            SkipReason::Invalid(msg) => write!(f, "invalid move: {msg}"),
        }
    }
}

/// Outcome of planning a drag event.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    Skip(SkipReason),
    Apply { next: Board, request: MoveRequest },
}

/// Plans the effect of `event` on `board`.
pub fn plan(board: &Board, event: &DragEvent) -> Plan {
    let Some(dest) = &event.destination else {
        return Plan::Skip(SkipReason::NoDestination);
    };
    if event.is_noop() {
        return Plan::Skip(SkipReason::Unchanged);
    }
    let result = match event.kind {
        DragKind::Column => plan_column(board, event.entity_id(), event.source.index, dest.index),
        DragKind::Card => plan_card(board, event.entity_id(), &event.source, dest),
    };
    result.unwrap_or_else(Plan::Skip)
}

fn plan_column(
    board: &Board,
    column_id: &str,
    source_index: usize,
    dest_index: usize,
) -> Result<Plan, SkipReason> {
    let sorted = sort_by_order(&board.columns);
    let len = sorted.len();
    let at_source = sorted
        .get(source_index)
        .ok_or(SkipReason::IndexOutOfRange {
            index: source_index,
            len,
        })?;
    if at_source.id != column_id {
        if board.column(column_id).is_none() {
            return Err(SkipReason::UnknownColumn(column_id.to_string()));
        }
        return Err(SkipReason::DraggableMismatch {
            expected: at_source.id.clone(),
            found: column_id.to_string(),
        });
    }

    // len > 0 here since source_index was found.
    let dest_index = dest_index.min(len - 1);
    if dest_index == source_index {
        return Err(SkipReason::Unchanged);
    }

    let columns = reorder_columns(&sorted, source_index, dest_index).map_err(skip_reason)?;
    let mut next = board.clone();
    next.columns = columns;
    Ok(Plan::Apply {
        next,
        request: MoveRequest::Column {
            column_id: column_id.to_string(),
            new_order: dest_index,
        },
    })
}

fn plan_card(
    board: &Board,
    card_id: &str,
    source: &Location,
    dest: &Location,
) -> Result<Plan, SkipReason> {
    let from = board
        .column(&source.droppable_id)
        .ok_or_else(|| SkipReason::UnknownColumn(source.droppable_id.clone()))?;
    let to = board
        .column(&dest.droppable_id)
        .ok_or_else(|| SkipReason::UnknownColumn(dest.droppable_id.clone()))?;

    // The card is located by id; the source index is only advisory.
    let source_index = sort_by_order(&from.cards)
        .iter()
        .position(|c| c.id == card_id)
        .ok_or_else(|| SkipReason::UnknownCard(card_id.to_string()))?;

    let same_column = from.id == to.id;
    let target = if same_column {
        CardTarget::SameColumn
    } else {
        CardTarget::Other(CardSlice::of(to))
    };
    let reorder = reorder_cards(
        CardSlice::of(from),
        card_id,
        source_index,
        target,
        dest.index,
    )
    .map_err(skip_reason)?;
    if same_column && reorder.index() == source_index {
        return Err(SkipReason::Unchanged);
    }

    let new_order = reorder.index();
    let next = with_cards(board, &from.id, &to.id, reorder);
    Ok(Plan::Apply {
        next,
        request: MoveRequest::Card {
            card_id: card_id.to_string(),
            from_column_id: from.id.clone(),
            new_column_id: to.id.clone(),
            new_order,
        },
    })
}

fn skip_reason(err: Error) -> SkipReason {
    match err {
        Error::IndexOutOfRange { index, len } => SkipReason::IndexOutOfRange { index, len },
        Error::ColumnNotFound(id) => SkipReason::UnknownColumn(id),
        Error::CardNotFound(id) => SkipReason::UnknownCard(id),
        Error::CardNotAtIndex { card_id, index } => SkipReason::DraggableMismatch {
            expected: format!("index {index}"),
            found: card_id,
        },
        other => SkipReason::Invalid(other.to_string()),
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
