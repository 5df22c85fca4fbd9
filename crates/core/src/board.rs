// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board tree types: Board, Column and Card.
//!
//! A board is stored denormalized: each column owns its cards. The array
//! position of columns (and of cards within a column) is the rendering order
//! and is kept equal to the ascending `order` field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level container of ordered columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// User who owns the board.
    pub owner_id: String,
    /// Users the board is shared with.
    #[serde(default)]
    pub members: Vec<String>,
    /// Longer description of the board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accent color as a CSS color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pinned by the owner.
    #[serde(default)]
    pub is_favorite: bool,
    /// Hidden from the active board list.
    #[serde(default)]
    pub is_archived: bool,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
    /// When the board was last modified.
    pub updated_at: DateTime<Utc>,
    /// Columns, ordered by `order`.
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// Ordered container of cards within a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub board_id: String,
    pub title: String,
    /// Zero-based position within the board.
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Scheduling status label (e.g. "active", "planned").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Cards, ordered by `order`.
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A task within a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub board_id: String,
    /// The column that contains this card.
    pub column_id: String,
    pub title: String,
    /// Zero-based position within the column.
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(id: &str, title: &str, owner_id: &str, now: DateTime<Utc>) -> Self {
        Board {
            id: id.to_string(),
            title: title.to_string(),
            owner_id: owner_id.to_string(),
            members: Vec::new(),
            description: None,
            color: None,
            tags: Vec::new(),
            is_favorite: false,
            is_archived: false,
            created_at: now,
            updated_at: now,
            columns: Vec::new(),
        }
    }

    /// Appends a column, adopting it (and its cards) into this board.
    pub fn with_column(mut self, mut column: Column) -> Self {
        column.board_id = self.id.clone();
        for card in &mut column.cards {
            card.board_id = self.id.clone();
        }
        self.columns.push(column);
        self
    }

    /// Looks up a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Finds a card anywhere on the board along with its containing column.
    pub fn locate_card(&self, card_id: &str) -> Option<(&Column, &Card)> {
        self.columns
            .iter()
            .find_map(|col| col.card(card_id).map(|card| (col, card)))
    }

    /// Total number of cards across all columns.
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Sorts columns, and the cards of each column, by ascending `order`.
    ///
    /// The sort is stable, so entries sharing an `order` keep their
    /// relative array position. Order values are left untouched.
    pub fn sort_by_order(&mut self) {
        self.columns.sort_by_key(|c| c.order);
        for column in &mut self.columns {
            column.cards.sort_by_key(|c| c.order);
        }
    }

    /// Verifies the ordering invariants of the board tree.
    ///
    /// Column orders must read `0..N-1` in array order, card orders `0..M-1`
    /// within each column, and every card must point at its containing
    /// column.
    pub fn check_invariants(&self) -> Result<()> {
        for (index, column) in self.columns.iter().enumerate() {
            if column.order != index {
                return Err(Error::InvariantViolation(format!(
                    "column {} has order {} at position {}",
                    column.id, column.order, index
                )));
            }
            for (pos, card) in column.cards.iter().enumerate() {
                if card.order != pos {
                    return Err(Error::InvariantViolation(format!(
                        "card {} has order {} at position {} of column {}",
                        card.id, card.order, pos, column.id
                    )));
                }
                if card.column_id != column.id {
                    return Err(Error::InvariantViolation(format!(
                        "card {} claims column {} but sits in {}",
                        card.id, card.column_id, column.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Column {
    /// Creates an empty column. `board_id` is filled in by [`Board::with_column`].
    pub fn new(id: &str, title: &str, order: usize, now: DateTime<Utc>) -> Self {
        Column {
            id: id.to_string(),
            board_id: String::new(),
            title: title.to_string(),
            order,
            description: None,
            status: None,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
            cards: Vec::new(),
        }
    }

    /// Appends a card, pointing it at this column.
    pub fn with_card(mut self, mut card: Card) -> Self {
        card.column_id = self.id.clone();
        card.board_id = self.board_id.clone();
        self.cards.push(card);
        self
    }

    /// Looks up a card in this column by id.
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

impl Card {
    /// Creates a card. Parent ids are filled in by [`Column::with_card`].
    pub fn new(id: &str, title: &str, order: usize, now: DateTime<Utc>) -> Self {
        Card {
            id: id.to_string(),
            board_id: String::new(),
            column_id: String::new(),
            title: title.to_string(),
            order,
            description: None,
            assigned_to: None,
            due_date: None,
            completed: false,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
