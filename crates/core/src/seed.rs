// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The starter board used by demo mode and by a freshly seeded server.

use chrono::{DateTime, Utc};

use crate::board::{Board, Card, Column};

/// Id of the starter board.
pub const STARTER_BOARD_ID: &str = "demo-board";

/// Builds the starter board with every timestamp set to `now`.
pub fn starter_board(now: DateTime<Utc>) -> Board {
    let card = |id: &str, title: &str, order: usize, tags: &[&str]| {
        let mut card = Card::new(id, title, order, now);
        card.tags = tags.iter().map(|t| t.to_string()).collect();
        card
    };

    let mut board = Board::new(STARTER_BOARD_ID, "Demo Board", "demo-user", now);
    board.description = Some("Drag columns and cards around to try things out.".to_string());
    board.color = Some("#6366f1".to_string());

    let mut todo = Column::new("todo", "To Do", 0, now);
    todo.status = Some("active".to_string());
    let mut doing = Column::new("in-progress", "In Progress", 1, now);
    doing.status = Some("active".to_string());
    let mut done = Column::new("done", "Done", 2, now);
    done.status = Some("completed".to_string());

    let mut shipped = card("task-4", "Set up the project", 0, &["setup"]);
    shipped.completed = true;

    board
        .with_column(
            todo.with_card(card("task-1", "Write the onboarding guide", 0, &["docs"]))
                .with_card(card("task-2", "Design the settings page", 1, &["design", "ui"])),
        )
        .with_column(doing.with_card(card("task-3", "Wire up drag and drop", 0, &["feature"])))
        .with_column(done.with_card(shipped))
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
