// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell moves, expressed as the drag events a board UI would emit.

use std::path::Path;

use lanes_core::{Board, DragEvent};

use super::Backend;
use crate::error::{Error, Result};

pub async fn move_column(start: &Path, column_id: &str, to: usize) -> Result<()> {
    let backend = Backend::open(start).await?;
    let event = column_event(&backend.board(), column_id, to)?;
    apply(&backend, &event).await
}

pub async fn move_card(start: &Path, card_id: &str, column_id: &str, index: usize) -> Result<()> {
    let backend = Backend::open(start).await?;
    let event = card_event(&backend.board(), card_id, column_id, index)?;
    apply(&backend, &event).await
}

/// Apply a raw drag-end event given as JSON.
pub async fn drop(start: &Path, event_json: &str) -> Result<()> {
    let event = DragEvent::from_json(event_json)?;
    let backend = Backend::open(start).await?;
    apply(&backend, &event).await
}

async fn apply(backend: &Backend, event: &DragEvent) -> Result<()> {
    let report = backend.drag(event).await?;
    println!("{}", report);
    Ok(())
}

/// The drag event that moves `column_id` to position `to`.
pub(crate) fn column_event(board: &Board, column_id: &str, to: usize) -> Result<DragEvent> {
    let from = board
        .columns
        .iter()
        .position(|c| c.id == column_id)
        .ok_or_else(|| Error::ColumnNotFound(column_id.to_string()))?;
    Ok(DragEvent::column(column_id, from, to))
}

/// The drag event that moves `card_id` into `column_id` at `index`.
pub(crate) fn card_event(
    board: &Board,
    card_id: &str,
    column_id: &str,
    index: usize,
) -> Result<DragEvent> {
    if board.column(column_id).is_none() {
        return Err(Error::ColumnNotFound(column_id.to_string()));
    }
    let (from, from_index) = board
        .locate_card(card_id)
        .and_then(|(column, _)| {
            column
                .cards
                .iter()
                .position(|c| c.id == card_id)
                .map(|i| (column, i))
        })
        .ok_or_else(|| Error::CardNotFound(card_id.to_string()))?;
    Ok(DragEvent::card(card_id, &from.id, from_index, column_id, index))
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod tests;
