// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-end events as emitted by a drag-and-drop surface.
//!
//! Columns live in a single droppable ([`BOARD_DROPPABLE_ID`]); each column
//! is itself a droppable for cards, identified by the column id. Draggable
//! ids carry a kind prefix (`col-` or `card-`) which is stripped before any
//! lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix of a column's draggable id.
pub const COLUMN_PREFIX: &str = "col-";

/// Prefix of a card's draggable id.
pub const CARD_PREFIX: &str = "card-";

/// Droppable id of the board-level column list.
pub const BOARD_DROPPABLE_ID: &str = "board";

/// What was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DragKind {
    Column,
    Card,
}

impl DragKind {
    /// The draggable id prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            DragKind::Column => COLUMN_PREFIX,
            DragKind::Card => CARD_PREFIX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DragKind::Column => "COLUMN",
            DragKind::Card => "CARD",
        }
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "COLUMN" => Ok(DragKind::Column),
            "CARD" => Ok(DragKind::Card),
            _ => Err(Error::InvalidDragKind(s.to_string())),
        }
    }
}

/// A position inside a droppable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub droppable_id: String,
    pub index: usize,
}

impl Location {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Location {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// The result of a completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub source: Location,
    /// `None` when the item was dropped outside any droppable.
    #[serde(default)]
    pub destination: Option<Location>,
    #[serde(rename = "type")]
    pub kind: DragKind,
    pub draggable_id: String,
}

impl DragEvent {
    /// A column drag from `from` to `to` within the board.
    pub fn column(column_id: &str, from: usize, to: usize) -> Self {
        DragEvent {
            source: Location::new(BOARD_DROPPABLE_ID, from),
            destination: Some(Location::new(BOARD_DROPPABLE_ID, to)),
            kind: DragKind::Column,
            draggable_id: format!("{COLUMN_PREFIX}{column_id}"),
        }
    }

    /// A card drag from `from_column[from_index]` to `to_column[to_index]`.
    pub fn card(
        card_id: &str,
        from_column: &str,
        from_index: usize,
        to_column: &str,
        to_index: usize,
    ) -> Self {
        DragEvent {
            source: Location::new(from_column, from_index),
            destination: Some(Location::new(to_column, to_index)),
            kind: DragKind::Card,
            draggable_id: format!("{CARD_PREFIX}{card_id}"),
        }
    }

    /// Drops the destination, as when the item is released outside any
    /// droppable.
    pub fn cancelled(mut self) -> Self {
        self.destination = None;
        self
    }

    /// Parses an event from its JSON form.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The entity id with the kind prefix removed.
    ///
    /// Ids without the prefix are returned as-is.
    pub fn entity_id(&self) -> &str {
        strip_prefix(self.kind, &self.draggable_id)
    }

    /// True when the gesture cannot change anything: no destination, or
    /// dropped back onto its own slot.
    pub fn is_noop(&self) -> bool {
        match &self.destination {
            None => true,
            Some(dest) => dest == &self.source,
        }
    }
}

/// Removes the prefix for `kind` from a draggable id, if present.
pub fn strip_prefix(kind: DragKind, draggable_id: &str) -> &str {
    draggable_id
        .strip_prefix(kind.prefix())
        .unwrap_or(draggable_id)
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
