// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::demo::StorageError;
use crate::store::StoreError;

/// All possible errors that can occur in the lanes library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'lanes init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("'{command}' is only available in demo mode\n  hint: remove [remote] from .lanes/config.toml to use the local demo board")]
    DemoOnly { command: &'static str },

    #[error("no user could be determined\n  hint: set 'user' in .lanes/config.toml or export LANES_USER")]
    NoUser,

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("card not found: {0}")]
    CardNotFound(String),

    #[error("{request} was refused: {reason}\n  hint: the board was reloaded from the store")]
    MoveReverted { request: String, reason: String },

    #[error("{request} was refused: {reason}\n  reloading the board also failed: {refetch_error}\n  hint: the shown board may be out of date, run 'lanes show' to reload it")]
    MoveRevertFailed {
        request: String,
        reason: String,
        refetch_error: String,
    },

    #[error("invalid remote URL '{0}': must start with ws:// or wss://")]
    InvalidRemoteUrl(String),

    #[error(transparent)]
    Core(#[from] lanes_core::Error),

    #[error("board store error: {0}")]
    Store(#[from] StoreError),

    #[error("demo storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for lanes operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
