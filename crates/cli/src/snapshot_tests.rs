// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::test_helpers::{card_ids, column_ids, sample_board};

#[test]
fn get_returns_initial_board() {
    let store = SnapshotStore::new(sample_board());
    assert_eq!(*store.get(), sample_board());
}

#[test]
fn replace_sorts_by_order() {
    let store = SnapshotStore::new(sample_board());
    let mut shuffled = sample_board();
    shuffled.columns.reverse();
    shuffled.columns[2].cards.reverse();

    store.replace(shuffled);

    let board = store.get();
    assert_eq!(column_ids(&board), vec!["x", "y", "z"]);
    assert_eq!(card_ids(&board, "x"), vec!["c1", "c2"]);
}

#[test]
fn readers_keep_their_snapshot() {
    let store = SnapshotStore::new(sample_board());
    let before = store.get();
    let mut next = sample_board();
    next.title = "Renamed".to_string();

    store.replace(next);

    assert_eq!(before.title, "Sample");
    assert_eq!(store.get().title, "Renamed");
}

#[test]
fn replace_writes_through_to_cache() {
    let cache = QueryCache::new();
    let store = SnapshotStore::with_cache(sample_board(), cache.clone());
    assert_eq!(*cache.get("b1").unwrap(), sample_board());

    let mut next = sample_board();
    next.title = "Renamed".to_string();
    store.replace(next);

    assert_eq!(cache.get("b1").unwrap().title, "Renamed");
}

#[test]
fn concurrent_replaces_keep_cache_in_step() {
    use std::sync::Barrier;
    use std::thread;

    for round in 0..500 {
        let cache = QueryCache::new();
        let store = SnapshotStore::with_cache(sample_board(), cache.clone());
        let barrier = Arc::new(Barrier::new(2));

        let writers: Vec<_> = ["Left", "Right"]
            .into_iter()
            .map(|title| {
                let store = store.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let mut next = sample_board();
                    next.title = title.to_string();
                    barrier.wait();
                    store.replace(next);
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(
            cache.get("b1").unwrap().title,
            store.get().title,
            "cache diverged in round {round}"
        );
    }
}

#[test]
fn plain_store_has_no_cache() {
    let cache = QueryCache::new();
    let store = SnapshotStore::new(sample_board());
    store.replace(sample_board());
    assert!(cache.get("b1").is_none());
}

#[test]
fn modify_publishes_only_when_changed() {
    let store = SnapshotStore::new(sample_board());
    let mut rx = store.subscribe();
    rx.borrow_and_update();

    assert!(!store.modify(|_| false));
    assert!(!rx.has_changed().unwrap());

    assert!(store.modify(|board| {
        board.title = "Changed".to_string();
        true
    }));
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().title, "Changed");
}

#[test]
fn modify_sees_latest_replace() {
    let store = SnapshotStore::new(sample_board());
    let mut next = sample_board();
    next.title = "Second".to_string();
    store.replace(next);

    let mut seen = String::new();
    store.modify(|board| {
        seen = board.title.clone();
        false
    });
    assert_eq!(seen, "Second");
}

#[test]
fn modify_writes_through_to_cache() {
    let cache = QueryCache::new();
    let store = SnapshotStore::with_cache(sample_board(), cache.clone());
    store.modify(|board| {
        board.title = "Changed".to_string();
        true
    });
    assert_eq!(cache.get("b1").unwrap().title, "Changed");
}

#[test]
fn stale_flag() {
    let store = SnapshotStore::new(sample_board());
    assert!(!store.is_stale());
    store.mark_stale();
    assert!(store.clone().is_stale());
    store.clear_stale();
    assert!(!store.is_stale());
}

#[test]
fn cache_invalidate() {
    let cache = QueryCache::new();
    cache.put(Arc::new(sample_board()));
    assert!(cache.invalidate("b1"));
    assert!(!cache.invalidate("b1"));
    assert!(cache.get("b1").is_none());
}
