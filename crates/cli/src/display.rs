// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lanes_core::{Board, Card, Column};

/// Format a card as one indented line: order, id, title.
///
/// Completed cards are suffixed with `(done)`.
pub fn format_card(card: &Card) -> String {
    let mut line = format!("  {:>2}  {}  {}", card.order, card.id, card.title);
    if card.completed {
        line.push_str(" (done)");
    }
    line
}

/// Format a column header followed by its cards.
pub fn format_column(column: &Column) -> Vec<String> {
    let mut lines = vec![format!(
        "{}. {} [{}] ({})",
        column.order,
        column.title,
        column.id,
        column.cards.len()
    )];
    if column.cards.is_empty() {
        lines.push("  (empty)".to_string());
    }
    lines.extend(column.cards.iter().map(format_card));
    lines
}

/// Format a whole board in rendering order.
pub fn format_board(board: &Board) -> String {
    let mut lines = vec![format!("{} [{}]", board.title, board.id)];
    for column in &board.columns {
        lines.push(String::new());
        lines.extend(format_column(column));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
