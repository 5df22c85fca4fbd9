// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordering engine: pure reorder functions over columns and cards.
//!
//! Every operation first sorts its input by the explicit `order` field and
//! never trusts incoming array position. Inputs are borrowed and never
//! mutated; results are new vectors with `order` re-stamped to the
//! contiguous sequence `0..n`.

use crate::board::{Board, Card, Column};
use crate::error::{Error, Result};

/// An entity with an explicit position within its parent.
pub trait Ordered {
    fn order(&self) -> usize;
    fn set_order(&mut self, order: usize);
}

impl Ordered for Column {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

impl Ordered for Card {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

/// Returns a copy of `items` sorted by ascending `order` (stable).
pub fn sort_by_order<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(Ordered::order);
    sorted
}

/// Reassigns `order` to each element's array index.
pub fn restamp<T: Ordered>(mut items: Vec<T>) -> Vec<T> {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index);
    }
    items
}

/// Re-stamps card orders and points every card at `column_id`.
fn restamp_cards(cards: Vec<Card>, column_id: &str) -> Vec<Card> {
    let mut cards = restamp(cards);
    for card in &mut cards {
        if card.column_id != column_id {
            card.column_id = column_id.to_string();
        }
    }
    cards
}

/// Moves the column at `source_index` to `dest_index`.
///
/// Indices refer to positions in the order-sorted list. The caller clamps
/// `dest_index` to `[0, columns.len()]`; anything outside that range is
/// rejected rather than clamped here.
pub fn reorder_columns(
    columns: &[Column],
    source_index: usize,
    dest_index: usize,
) -> Result<Vec<Column>> {
    let len = columns.len();
    if source_index >= len {
        return Err(Error::IndexOutOfRange {
            index: source_index,
            len,
        });
    }
    if dest_index > len {
        return Err(Error::IndexOutOfRange {
            index: dest_index,
            len,
        });
    }

    let mut working = sort_by_order(columns);
    let moved = working.remove(source_index);
    // One past the remainder is still "the end".
    let at = dest_index.min(working.len());
    working.insert(at, moved);
    Ok(restamp(working))
}

/// A column's id together with its cards.
#[derive(Debug, Clone, Copy)]
pub struct CardSlice<'a> {
    pub column_id: &'a str,
    pub cards: &'a [Card],
}

impl<'a> CardSlice<'a> {
    pub fn of(column: &'a Column) -> Self {
        CardSlice {
            column_id: &column.id,
            cards: &column.cards,
        }
    }
}

/// Where a dragged card lands.
#[derive(Debug, Clone, Copy)]
pub enum CardTarget<'a> {
    /// Back into the column it came from. The destination index refers to
    /// the list with the card already removed.
    SameColumn,
    /// Into a different column.
    Other(CardSlice<'a>),
}

/// Result of [`reorder_cards`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardReorder {
    source: Vec<Card>,
    dest: Option<Vec<Card>>,
    index: usize,
}

impl CardReorder {
    /// Cards of the source column after the move.
    pub fn source(&self) -> &[Card] {
        &self.source
    }

    /// Cards of the destination column after the move. For a same-column
    /// move this is the same list as [`CardReorder::source`].
    pub fn dest(&self) -> &[Card] {
        self.dest.as_deref().unwrap_or(&self.source)
    }

    /// True when source and destination are one column.
    pub fn is_same_column(&self) -> bool {
        self.dest.is_none()
    }

    /// The clamped index the card was inserted at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Splits into the source list and, for cross-column moves, the
    /// destination list.
    pub fn into_lists(self) -> (Vec<Card>, Option<Vec<Card>>) {
        (self.source, self.dest)
    }
}

/// Moves `card_id`, which must sit at `source_index` of the order-sorted
/// source list, to `dest_index` of the target.
///
/// `dest_index` is clamped to `[0, dest.len()]`. The moved card takes the
/// destination column id, and both resulting lists are re-stamped.
pub fn reorder_cards(
    source: CardSlice<'_>,
    card_id: &str,
    source_index: usize,
    target: CardTarget<'_>,
    dest_index: usize,
) -> Result<CardReorder> {
    let mut working = sort_by_order(source.cards);
    match working.get(source_index) {
        Some(card) if card.id == card_id => {}
        Some(_) => {
            return Err(Error::CardNotAtIndex {
                card_id: card_id.to_string(),
                index: source_index,
            })
        }
        None => {
            return Err(Error::IndexOutOfRange {
                index: source_index,
                len: working.len(),
            })
        }
    }
    let mut moved = working.remove(source_index);

    match target {
        CardTarget::SameColumn => {
            let index = dest_index.min(working.len());
            working.insert(index, moved);
            Ok(CardReorder {
                source: restamp_cards(working, source.column_id),
                dest: None,
                index,
            })
        }
        CardTarget::Other(dest) => {
            let mut dest_cards = sort_by_order(dest.cards);
            let index = dest_index.min(dest_cards.len());
            moved.column_id = dest.column_id.to_string();
            dest_cards.insert(index, moved);
            Ok(CardReorder {
                source: restamp_cards(working, source.column_id),
                dest: Some(restamp_cards(dest_cards, dest.column_id)),
                index,
            })
        }
    }
}

/// Builds a new board with the columns touched by `reorder` replaced.
pub fn with_cards(
    board: &Board,
    source_column_id: &str,
    dest_column_id: &str,
    reorder: CardReorder,
) -> Board {
    let (source, dest) = reorder.into_lists();
    let mut source = Some(source);
    let mut dest = dest;
    let mut next = board.clone();
    for column in &mut next.columns {
        if column.id == source_column_id {
            if let Some(cards) = source.take() {
                column.cards = cards;
            }
        } else if column.id == dest_column_id {
            if let Some(cards) = dest.take() {
                column.cards = cards;
            }
        }
    }
    next
}

/// Moves a column to `new_order`, clamped to the last position.
///
/// This is the authoritative "move column" operation of a board store.
pub fn move_column(board: &Board, column_id: &str, new_order: usize) -> Result<Board> {
    let sorted = sort_by_order(&board.columns);
    let source_index = sorted
        .iter()
        .position(|c| c.id == column_id)
        .ok_or_else(|| Error::ColumnNotFound(column_id.to_string()))?;
    let dest_index = new_order.min(sorted.len() - 1);
    let columns = reorder_columns(&sorted, source_index, dest_index)?;
    let mut next = board.clone();
    next.columns = columns;
    Ok(next)
}

/// Moves a card into `new_column_id` at `new_order`, clamped to the end.
///
/// This is the authoritative "move card" operation of a board store.
pub fn move_card(
    board: &Board,
    card_id: &str,
    new_column_id: &str,
    new_order: usize,
) -> Result<Board> {
    let (from, _) = board
        .locate_card(card_id)
        .ok_or_else(|| Error::CardNotFound(card_id.to_string()))?;
    let to = board
        .column(new_column_id)
        .ok_or_else(|| Error::ColumnNotFound(new_column_id.to_string()))?;

    let source_index = sort_by_order(&from.cards)
        .iter()
        .position(|c| c.id == card_id)
        .ok_or_else(|| Error::CardNotFound(card_id.to_string()))?;
    let target = if from.id == to.id {
        CardTarget::SameColumn
    } else {
        CardTarget::Other(CardSlice::of(to))
    };

    let reorder = reorder_cards(CardSlice::of(from), card_id, source_index, target, new_order)?;
    Ok(with_cards(board, &from.id, &to.id, reorder))
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
