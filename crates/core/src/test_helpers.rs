// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for lanes-core unit tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Utc};

use crate::board::{Board, Card, Column};

/// A fixed timestamp so fixtures compare equal across calls.
pub fn ts() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
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

/// Columns `[A, B, C]` with orders 0, 1, 2 and no cards.
pub fn columns_abc() -> Vec<Column> {
    vec![
        Column::new("a", "A", 0, ts()),
        Column::new("b", "B", 1, ts()),
        Column::new("c", "C", 2, ts()),
    ]
}

/// Cards with the given ids, stamped `0..n` and pointing at `column_id`.
pub fn cards(column_id: &str, ids: &[&str]) -> Vec<Card> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let mut card = Card::new(id, id, i, ts());
            card.column_id = column_id.to_string();
            card.board_id = "b1".to_string();
            card
        })
        .collect()
}

/// Ids in array order.
pub fn ids<T: HasId>(items: &[T]) -> Vec<&str> {
    items.iter().map(HasId::id).collect()
}

/// Orders in array order.
pub fn orders<T: HasId>(items: &[T]) -> Vec<usize> {
    items.iter().map(HasId::order).collect()
}

pub trait HasId {
    fn id(&self) -> &str;
    fn order(&self) -> usize;
}

impl HasId for Column {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> usize {
        self.order
    }
}

impl HasId for Card {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> usize {
        self.order
    }
}
