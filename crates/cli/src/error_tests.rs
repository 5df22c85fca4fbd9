// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    not_initialized = { Error::NotInitialized, "lanes init" },
    demo_only = { Error::DemoOnly { command: "undo" }, "'undo' is only available in demo mode" },
    no_user = { Error::NoUser, "LANES_USER" },
    bad_url = { Error::InvalidRemoteUrl("http://x".into()), "ws://" },
    config = { Error::Config("bad".into()), "config error: bad" },
    reverted = {
        Error::MoveReverted { request: "move column x to 1".into(), reason: "nope".into() },
        "move column x to 1 was refused: nope"
    },
    revert_failed = {
        Error::MoveRevertFailed {
            request: "move card c1 to y:0".into(),
            reason: "nope".into(),
            refetch_error: "connection closed".into(),
        },
        "reloading the board also failed: connection closed"
    },
)]
fn error_display(err: Error, expected: &str) {
    assert!(
        err.to_string().contains(expected),
        "{err} should contain {expected}"
    );
}

#[test]
fn core_errors_are_transparent() {
    let err: Error = lanes_core::Error::CardNotFound("c9".into()).into();
    assert_eq!(err.to_string(), "card not found: c9");
}

#[test]
fn store_errors_are_prefixed() {
    let err: Error = StoreError::Rejected("nope".into()).into();
    assert!(err.to_string().starts_with("board store error:"));
}
