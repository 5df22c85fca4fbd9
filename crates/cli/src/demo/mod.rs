// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo mode: a board persisted locally with no backend.
//!
//! Drags follow the same planning rules as the remote coordinator, but
//! persistence is a synchronous write of the whole board to a key-value
//! [`LocalStorage`]. The last cross-column card move can be undone.

mod coordinator;
mod storage;

pub use coordinator::{DemoCoordinator, DemoOutcome, UndoSlot, DEMO_BOARD_KEY};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError, StorageResult};
