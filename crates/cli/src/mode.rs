// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operating mode detection for the lanes CLI.
//!
//! Determines whether to run against the local demo board or a remote
//! board store.

use crate::config::Config;

/// Operating mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Demo mode: board persisted locally, no network.
    Demo,
    /// Remote mode: board persisted by a WebSocket board store.
    Remote,
}

impl OperatingMode {
    /// Detect the operating mode from the given configuration.
    pub fn detect(config: &Config) -> Self {
        if config.is_remote_mode() {
            OperatingMode::Remote
        } else {
            OperatingMode::Demo
        }
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatingMode::Demo => write!(f, "demo"),
            OperatingMode::Remote => write!(f, "remote"),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
