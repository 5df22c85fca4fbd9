// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::tempdir;
use yare::parameterized;

#[test]
fn file_storage_set_get_remove() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();

    assert_eq!(storage.get("kanban-demo-board").unwrap(), None);
    storage.set("kanban-demo-board", "{\"a\":1}").unwrap();
    assert_eq!(
        storage.get("kanban-demo-board").unwrap().as_deref(),
        Some("{\"a\":1}")
    );
    assert!(dir.path().join("kanban-demo-board.json").exists());

    storage.remove("kanban-demo-board").unwrap();
    assert_eq!(storage.get("kanban-demo-board").unwrap(), None);
}

#[test]
fn file_storage_overwrites_without_leftovers() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    storage.set("k", "one").unwrap();
    storage.set("k", "two").unwrap();

    assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    assert!(!dir.path().join(".k.json.tmp").exists());
}

#[test]
fn file_storage_persists_across_instances() {
    let dir = tempdir().unwrap();
    FileStorage::open(dir.path()).unwrap().set("k", "v").unwrap();
    let reopened = FileStorage::open(dir.path()).unwrap();
    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn file_storage_creates_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a/b");
    let storage = FileStorage::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(storage.dir(), nested.as_path());
}

#[test]
fn removing_missing_key_is_ok() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    storage.remove("never-set").unwrap();
}

#[parameterized(
    empty = { "" },
    traversal = { "../etc" },
    slash = { "a/b" },
    dot = { "a.b" },
)]
fn invalid_keys(key: &str) {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    assert!(matches!(storage.get(key), Err(StorageError::InvalidKey(_))));
    assert!(matches!(MemoryStorage::new().set(key, "v"), Err(StorageError::InvalidKey(_))));
}

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn arc_storage_shares_state() {
    let storage = std::sync::Arc::new(MemoryStorage::new());
    let handle = std::sync::Arc::clone(&storage);
    handle.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
}
