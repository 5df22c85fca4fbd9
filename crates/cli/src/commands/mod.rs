// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod demo;
pub mod init;
pub mod moves;
pub mod show;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lanes_core::{Board, DragEvent, MoveRequest, SkipReason};
use tracing::debug;

use crate::config::{find_lanes_dir, Config};
use crate::coordinator::{DragCoordinator, DragOutcome, Settlement};
use crate::demo::{DemoCoordinator, DemoOutcome, FileStorage};
use crate::error::{Error, Result};
use crate::mode::OperatingMode;
use crate::session::{current_user, Session};
use crate::snapshot::QueryCache;
use crate::store::{BoardStore, RemoteBoardStore};

/// Locate and load the project configuration above `start`.
pub fn open_config(start: &Path) -> Result<(PathBuf, Config)> {
    let lanes_dir = find_lanes_dir(start)?;
    let config = Config::load(&lanes_dir)?;
    Ok((lanes_dir, config))
}

/// Open the demo board, refusing in remote mode.
pub fn open_demo(start: &Path, command: &'static str) -> Result<DemoCoordinator<FileStorage>> {
    let (lanes_dir, config) = open_config(start)?;
    if OperatingMode::detect(&config) == OperatingMode::Remote {
        return Err(Error::DemoOnly { command });
    }
    let storage = FileStorage::open(&config.demo_storage_dir(&lanes_dir))?;
    DemoCoordinator::open(storage)
}

/// A board opened in the configured operating mode.
pub enum Backend {
    Demo(DemoCoordinator<FileStorage>),
    Remote(DragCoordinator<RemoteBoardStore>),
}

impl Backend {
    /// Open the board for the project above `start`.
    ///
    /// In remote mode this fetches the board, and requires a user.
    pub async fn open(start: &Path) -> Result<Self> {
        let (lanes_dir, config) = open_config(start)?;
        let mode = OperatingMode::detect(&config);
        debug!(%mode, board = %config.board, "opening board");

        match (mode, &config.remote) {
            (OperatingMode::Remote, Some(remote)) => {
                let user = current_user(&config).ok_or(Error::NoUser)?;
                let session = Session::new(user, config.board.clone());
                let store = Arc::new(RemoteBoardStore::new(remote.store_config()));
                let coordinator = DragCoordinator::load(session, store, QueryCache::new()).await?;
                Ok(Backend::Remote(coordinator))
            }
            _ => {
                let storage = FileStorage::open(&config.demo_storage_dir(&lanes_dir))?;
                Ok(Backend::Demo(DemoCoordinator::open(storage)?))
            }
        }
    }

    pub fn board(&self) -> Arc<Board> {
        match self {
            Backend::Demo(demo) => demo.board(),
            Backend::Remote(coordinator) => coordinator.board(),
        }
    }

    /// Apply a drag and wait until it is persisted.
    pub async fn drag(&self, event: &DragEvent) -> Result<DragReport> {
        match self {
            Backend::Demo(demo) => Ok(match demo.on_drag_end(event)? {
                DemoOutcome::Skipped(reason) => DragReport::Skipped(reason),
                DemoOutcome::Applied(request) => DragReport::Applied(request),
            }),
            Backend::Remote(coordinator) => drag_and_settle(coordinator, event).await,
        }
    }
}

/// How a drag issued from the shell ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragReport {
    Skipped(SkipReason),
    Applied(MoveRequest),
}

impl std::fmt::Display for DragReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragReport::Skipped(reason) => write!(f, "Nothing to do: {}", reason),
            DragReport::Applied(request) => write!(f, "Applied: {}", request),
        }
    }
}

/// Run a gesture through the coordinator and wait for its settlement.
///
/// A refused move is an error, after the snapshot has been re-fetched.
pub async fn drag_and_settle<S: BoardStore + 'static>(
    coordinator: &DragCoordinator<S>,
    event: &DragEvent,
) -> Result<DragReport> {
    let pending = match coordinator.on_drag_end(event) {
        DragOutcome::Skipped(reason) => return Ok(DragReport::Skipped(reason)),
        DragOutcome::Applied(pending) => pending,
    };
    let request = pending.request.clone();
    match pending.settled().await? {
        Settlement::Settled => Ok(DragReport::Applied(request)),
        Settlement::Reverted { reason } => Err(Error::MoveReverted {
            request: request.to_string(),
            reason,
        }),
        Settlement::RevertFailed {
            reason,
            refetch_error,
        } => Err(Error::MoveRevertFailed {
            request: request.to_string(),
            reason,
            refetch_error,
        }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
