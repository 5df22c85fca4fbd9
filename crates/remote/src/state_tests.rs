// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::DateTime;
use lanes_core::STARTER_BOARD_ID;

fn ids(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column(column_id)
        .unwrap()
        .cards
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

fn old_board() -> Board {
    starter_board(DateTime::from_timestamp(1_700_000_000, 0).unwrap())
}

#[tokio::test]
async fn move_card_restamps_card_and_board() {
    let state = ServerState::with_boards(vec![old_board()], None);

    let card = state.move_card("task-1", "in-progress", 0).await.unwrap();
    assert_eq!(card.column_id, "in-progress");
    assert_eq!(card.order, 0);
    assert!(card.updated_at > old_board().updated_at);

    let board = state.fetch_board(STARTER_BOARD_ID).await.unwrap();
    assert_eq!(ids(&board, "todo"), vec!["task-2"]);
    assert_eq!(ids(&board, "in-progress"), vec!["task-1", "task-3"]);
    board.check_invariants().unwrap();
    assert!(board.updated_at > old_board().updated_at);
}

#[tokio::test]
async fn move_column_clamps_position() {
    let state = ServerState::with_boards(vec![old_board()], None);

    let column = state.move_column("todo", 40).await.unwrap();
    assert_eq!(column.order, 2);

    let board = state.fetch_board(STARTER_BOARD_ID).await.unwrap();
    let order: Vec<_> = board.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["in-progress", "done", "todo"]);
}

#[tokio::test]
async fn unknown_ids_are_errors() {
    let state = ServerState::seeded();

    let err = state.move_card("nope", "todo", 0).await.unwrap_err();
    assert!(matches!(err, StateError::Core(lanes_core::Error::CardNotFound(_))));

    let err = state.move_card("task-1", "nope", 0).await.unwrap_err();
    assert!(matches!(err, StateError::Core(lanes_core::Error::ColumnNotFound(_))));

    let err = state.move_column("nope", 0).await.unwrap_err();
    assert!(matches!(err, StateError::Core(lanes_core::Error::ColumnNotFound(_))));
}

#[tokio::test]
async fn reject_moves_leaves_board_untouched() {
    let state = ServerState::with_boards(vec![old_board()], None);
    state.set_reject_moves(true);

    let err = state.move_column("todo", 1).await.unwrap_err();
    assert!(matches!(err, StateError::MovesDisabled));
    assert_eq!(state.fetch_board(STARTER_BOARD_ID).await.unwrap(), old_board());

    state.set_reject_moves(false);
    state.move_column("todo", 1).await.unwrap();
}

#[tokio::test]
async fn data_file_is_seeded_then_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boards.json");

    let state = ServerState::open(&path).unwrap();
    assert!(!path.exists());
    state.move_card("task-3", "done", 5).await.unwrap();
    assert!(path.exists());

    let reopened = ServerState::open(&path).unwrap();
    let board = reopened.fetch_board(STARTER_BOARD_ID).await.unwrap();
    assert_eq!(ids(&board, "done"), vec!["task-4", "task-3"]);
}

#[tokio::test]
async fn unreadable_data_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boards.json");
    std::fs::write(&path, "{").unwrap();

    assert!(matches!(ServerState::open(&path), Err(StateError::Json(_))));
}
