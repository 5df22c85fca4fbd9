// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn lanes() -> Command {
    let mut cmd = cargo_bin_cmd!("lanes");
    cmd.env_remove("LANES_LOG");
    cmd
}

/// Helper to create an initialized temp directory (demo mode)
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lanes()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run `lanes show -o json` and return the parsed board.
pub fn show_json(temp: &TempDir) -> serde_json::Value {
    let output = lanes()
        .args(["show", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Card ids of a column in a `show -o json` board, in rendering order.
pub fn card_ids(board: &serde_json::Value, column_id: &str) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column_id)
        .unwrap()["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn column_ids(board: &serde_json::Value) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}
