// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lanes - optimistic kanban board reordering.
//!
//! This crate provides the client side of the `lanes` CLI: a snapshot store
//! for the rendered board, a drag coordinator that applies moves
//! optimistically and reconciles them with a remote board store, and a demo
//! variant that persists the board locally with a single-slot undo.
//!
//! # Main Components
//!
//! - [`SnapshotStore`] - the in-memory board the shell renders
//! - [`DragCoordinator`] - optimistic moves backed by a [`BoardStore`]
//! - [`DemoCoordinator`] - the same moves against local storage
//! - [`Config`] - project configuration in `.lanes/config.toml`
//!
//! ```rust,ignore
//! use lanes::{DragCoordinator, QueryCache, RemoteBoardStore, Session};
//!
//! let store = Arc::new(RemoteBoardStore::new(remote.store_config()));
//! let coordinator = DragCoordinator::load(session, store, QueryCache::new()).await?;
//! if let DragOutcome::Applied(pending) = coordinator.on_drag_end(&event) {
//!     pending.settled().await?;
//! }
//! ```

mod cli;
mod commands;
mod display;
mod mode;

pub mod config;
pub mod coordinator;
pub mod demo;
pub mod error;
pub mod session;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod test_helpers;

use std::path::PathBuf;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_lanes_dir, init_lanes_dir, Config, RemoteConfig};
pub use coordinator::{DragCoordinator, DragOutcome, FailureNotice, PendingMove, Settlement};
pub use demo::{DemoCoordinator, DemoOutcome, FileStorage, LocalStorage, MemoryStorage, UndoSlot};
pub use error::{Error, Result};
pub use mode::OperatingMode;
pub use session::{current_user, Session, User};
pub use snapshot::{QueryCache, SnapshotStore};
pub use store::{BoardStore, RemoteBoardStore, StoreConfig, StoreError, WebSocketTransport};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub async fn run(cli: Cli) -> Result<()> {
    let start = match cli.directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::Init {
            board,
            remote,
            user,
            path,
        } => commands::init::run(&start, board, remote, user, path),
        Command::Show { output } => commands::show::run(&start, output).await,
        Command::MoveColumn { column, to } => {
            commands::moves::move_column(&start, &column, to).await
        }
        Command::MoveCard {
            card,
            column,
            index,
        } => commands::moves::move_card(&start, &card, &column, index).await,
        Command::Drop { event } => commands::moves::drop(&start, &event).await,
        Command::Undo => commands::demo::undo(&start),
        Command::Reset => commands::demo::reset(&start),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lanes", &mut std::io::stdout());
            Ok(())
        }
    }
}
