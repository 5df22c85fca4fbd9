// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag coordinator: optimistic reordering backed by a remote board store.
//!
//! A gesture moves through these states:
//!
//! ```text
//! DragEnded ─┬─► Skipped
//!            └─► Applying ─► Persisting ─┬─► Settled
//!                                        └─► Reverting ─┬─► Reverted
//!                                                       └─► RevertFailed
//! ```
//!
//! [`DragCoordinator::on_drag_end`] plans the move, replaces the snapshot
//! synchronously, then spawns the persistence request and returns without
//! waiting for it. A failed request is recovered by re-fetching the whole
//! board from the store; there is no retry and no partial patch.

use std::sync::Arc;

use lanes_core::{plan, Board, DragEvent, MoveRequest, Plan, SkipReason};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::session::Session;
use crate::snapshot::{QueryCache, SnapshotStore};
use crate::store::{BoardStore, StoreResult};

/// How a gesture's persistence request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The store accepted the move.
    Settled,
    /// The store refused the move; the snapshot was replaced by a fresh
    /// fetch.
    Reverted { reason: String },
    /// The store refused the move and the re-fetch failed too. The
    /// optimistic state is kept and the snapshot is flagged stale.
    RevertFailed {
        reason: String,
        refetch_error: String,
    },
}

/// Sent on the failure channel for every gesture that did not settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub request: MoveRequest,
    pub settlement: Settlement,
}

/// A move applied to the snapshot and in flight to the store.
#[derive(Debug)]
pub struct PendingMove {
    pub request: MoveRequest,
    handle: JoinHandle<Settlement>,
}

impl PendingMove {
    /// Waits for the persistence request to settle.
    pub async fn settled(self) -> Result<Settlement> {
        Ok(self.handle.await?)
    }
}

/// Result of [`DragCoordinator::on_drag_end`].
#[derive(Debug)]
pub enum DragOutcome {
    /// Nothing changed and nothing was sent.
    Skipped(SkipReason),
    Applied(PendingMove),
}

/// Coordinates drag gestures for one board.
pub struct DragCoordinator<S: BoardStore + 'static> {
    session: Session,
    store: Arc<S>,
    snapshot: SnapshotStore,
    notices: Option<mpsc::UnboundedSender<FailureNotice>>,
}

impl<S: BoardStore + 'static> DragCoordinator<S> {
    pub fn new(session: Session, store: Arc<S>, snapshot: SnapshotStore) -> Self {
        DragCoordinator {
            session,
            store,
            snapshot,
            notices: None,
        }
    }

    /// Fetches the session's board and builds a coordinator around it.
    pub async fn load(session: Session, store: Arc<S>, cache: QueryCache) -> StoreResult<Self> {
        let board = store.fetch_board(&session.board_id).await?;
        debug!(board = %session.board_id, user = %session.user.name, "loaded board");
        let snapshot = SnapshotStore::with_cache(board, cache);
        Ok(Self::new(session, store, snapshot))
    }

    /// Reports every gesture that does not settle on `tx`.
    pub fn with_notifier(mut self, tx: mpsc::UnboundedSender<FailureNotice>) -> Self {
        self.notices = Some(tx);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> &SnapshotStore {
        &self.snapshot
    }

    /// The current board.
    pub fn board(&self) -> Arc<Board> {
        self.snapshot.get()
    }

    /// Replaces the snapshot with a fresh fetch and clears the stale flag.
    pub async fn refetch(&self) -> StoreResult<Arc<Board>> {
        let board = self.store.fetch_board(&self.session.board_id).await?;
        self.snapshot.replace(board);
        self.snapshot.clear_stale();
        Ok(self.snapshot.get())
    }

    /// Handles the end of a drag gesture.
    ///
    /// Must be called from within a Tokio runtime: persistence runs on a
    /// spawned task.
    pub fn on_drag_end(&self, event: &DragEvent) -> DragOutcome {
        let current = self.snapshot.get();
        let (next, request) = match plan(&current, event) {
            Plan::Skip(reason) => {
                debug!(draggable = %event.draggable_id, %reason, "drag skipped");
                return DragOutcome::Skipped(reason);
            }
            Plan::Apply { next, request } => (next, request),
        };

        debug!(user = %self.session.user.name, %request, "applying optimistic move");
        self.snapshot.replace(next);

        let handle = tokio::spawn(persist(
            Arc::clone(&self.store),
            self.snapshot.clone(),
            self.session.board_id.clone(),
            request.clone(),
            self.notices.clone(),
        ));
        DragOutcome::Applied(PendingMove { request, handle })
    }
}

/// What the store returned for an accepted move.
enum Persisted {
    Column(lanes_core::Column),
    Card(lanes_core::Card),
}

async fn persist<S: BoardStore>(
    store: Arc<S>,
    snapshot: SnapshotStore,
    board_id: String,
    request: MoveRequest,
    notices: Option<mpsc::UnboundedSender<FailureNotice>>,
) -> Settlement {
    let result = match &request {
        MoveRequest::Column {
            column_id,
            new_order,
        } => store
            .move_column(column_id, *new_order)
            .await
            .map(Persisted::Column),
        MoveRequest::Card {
            card_id,
            new_column_id,
            new_order,
            ..
        } => store
            .move_card(card_id, new_column_id, *new_order)
            .await
            .map(Persisted::Card),
    };

    let reason = match result {
        Ok(persisted) => {
            reconcile(&snapshot, persisted);
            info!(%request, "move settled");
            return Settlement::Settled;
        }
        Err(e) => e.to_string(),
    };

    warn!(%request, "move failed, reverting: {}", reason);
    let settlement = match store.fetch_board(&board_id).await {
        Ok(board) => {
            snapshot.replace(board);
            snapshot.clear_stale();
            info!(%request, "move reverted");
            Settlement::Reverted { reason }
        }
        Err(e) => {
            snapshot.mark_stale();
            error!(%request, "revert failed, board is stale: {}", e);
            Settlement::RevertFailed {
                reason,
                refetch_error: e.to_string(),
            }
        }
    };

    if let Some(tx) = notices {
        // The receiver may have gone away; the settlement is still returned.
        let _ = tx.send(FailureNotice {
            request,
            settlement: settlement.clone(),
        });
    }
    settlement
}

/// Copies the store's `updated_at` onto the latest snapshot.
fn reconcile(snapshot: &SnapshotStore, persisted: Persisted) {
    snapshot.modify(|board| {
        let (slot, stored) = match &persisted {
            Persisted::Column(stored) => (
                board
                    .columns
                    .iter_mut()
                    .find(|c| c.id == stored.id)
                    .map(|c| &mut c.updated_at),
                stored.updated_at,
            ),
            Persisted::Card(stored) => (
                board
                    .columns
                    .iter_mut()
                    .flat_map(|c| c.cards.iter_mut())
                    .find(|c| c.id == stored.id)
                    .map(|c| &mut c.updated_at),
                stored.updated_at,
            ),
        };
        match slot {
            Some(updated_at) if *updated_at != stored => {
                *updated_at = stored;
                true
            }
            _ => false,
        }
    });
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
