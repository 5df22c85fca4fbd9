// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lanes-core operations.

use thiserror::Error;

/// All possible errors that can occur in lanes-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("card not found: {0}")]
    CardNotFound(String),

    #[error("index {index} out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("card {card_id} is not at index {index}\n  hint: the board snapshot is out of date, refetch it")]
    CardNotAtIndex { card_id: String, index: usize },

    #[error("invalid drag type: '{0}'\n  hint: valid types are: COLUMN, CARD")]
    InvalidDragKind(String),

    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lanes-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
