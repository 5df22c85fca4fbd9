// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use lanes_core::STARTER_BOARD_ID;

use crate::config::{init_lanes_dir, Config, RemoteConfig};
use crate::error::Result;
use crate::mode::OperatingMode;

pub fn run(
    start: &Path,
    board: Option<String>,
    remote: Option<String>,
    user: Option<String>,
    path: Option<String>,
) -> Result<()> {
    let target = match path {
        Some(p) => start.join(p),
        None => start.to_path_buf(),
    };
    let config = build_config(board, remote, user);
    std::fs::create_dir_all(&target)?;
    let lanes_dir = init_lanes_dir(&target, &config)?;

    println!("Initialized lanes board at {}", lanes_dir.display());
    println!("Mode: {}", OperatingMode::detect(&config));
    println!("Board: {}", config.board);
    Ok(())
}

pub(crate) fn build_config(
    board: Option<String>,
    remote: Option<String>,
    user: Option<String>,
) -> Config {
    let mut config = Config::new(board.unwrap_or_else(|| STARTER_BOARD_ID.to_string()));
    config.user = user;
    config.remote = remote.map(RemoteConfig::new);
    config
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
