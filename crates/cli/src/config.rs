// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.lanes/config.toml` and includes:
//! - `board`: The id of the board this project works on
//! - `user`: Optional display name, overriding identity detection
//! - `[remote]`: WebSocket board store settings (absent means demo mode)
//! - `[demo]`: Where the demo board is persisted

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::store::StoreConfig;

const LANES_DIR_NAME: &str = ".lanes";
const CONFIG_FILE_NAME: &str = "config.toml";
const GITIGNORE_FILE_NAME: &str = ".gitignore";
const DEFAULT_DEMO_DIR: &str = ".lanes/demo";

/// Project configuration stored in `.lanes/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Board id shown and edited by the shell.
    pub board: String,
    /// Display name of the current user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Remote board store (optional - if absent, runs in demo mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
    /// Demo mode settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<DemoConfig>,
}

/// Remote board store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// WebSocket URL: `ws://...` or `wss://...`.
    pub url: String,
    /// Maximum connection attempts before giving up (default: 10).
    #[serde(default = "default_reconnect_max_retries")]
    pub reconnect_max_retries: u32,
    /// Maximum delay between connection attempts in seconds (default: 30).
    #[serde(default = "default_reconnect_max_delay_secs")]
    pub reconnect_max_delay_secs: u64,
    /// First backoff delay in milliseconds (default: 100).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Max time to wait for a response in seconds (default: 10).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Demo mode configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Directory holding the persisted demo board, relative to the project
    /// root (default: `.lanes/demo`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<String>,
}

fn default_reconnect_max_retries() -> u32 {
    10
}

fn default_reconnect_max_delay_secs() -> u64 {
    30
}

fn default_initial_delay_ms() -> u64 {
    100
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl RemoteConfig {
    /// Creates a remote config with default connection settings.
    pub fn new(url: impl Into<String>) -> Self {
        RemoteConfig {
            url: url.into(),
            reconnect_max_retries: default_reconnect_max_retries(),
            reconnect_max_delay_secs: default_reconnect_max_delay_secs(),
            initial_delay_ms: default_initial_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Validates that the URL is a WebSocket URL.
    pub fn validate_url(&self) -> Result<()> {
        if self.url.starts_with("ws://") || self.url.starts_with("wss://") {
            Ok(())
        } else {
            Err(Error::InvalidRemoteUrl(self.url.clone()))
        }
    }

    /// Settings for the WebSocket board store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            url: self.url.clone(),
            max_retries: self.reconnect_max_retries,
            max_delay_secs: self.reconnect_max_delay_secs,
            initial_delay_ms: self.initial_delay_ms,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

impl Config {
    /// Creates a demo-mode config for `board`.
    pub fn new(board: impl Into<String>) -> Self {
        Config {
            board: board.into(),
            user: None,
            remote: None,
            demo: None,
        }
    }

    /// Loads configuration from the given `.lanes/` directory.
    pub fn load(lanes_dir: &Path) -> Result<Self> {
        let config_path = lanes_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if let Some(remote) = &config.remote {
            remote.validate_url()?;
        }
        Ok(config)
    }

    /// Saves configuration to the given `.lanes/` directory.
    pub fn save(&self, lanes_dir: &Path) -> Result<()> {
        let config_path = lanes_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Returns true if a remote board store is configured.
    pub fn is_remote_mode(&self) -> bool {
        self.remote.is_some()
    }

    /// Directory for the persisted demo board.
    pub fn demo_storage_dir(&self, lanes_dir: &Path) -> PathBuf {
        let configured = self
            .demo
            .as_ref()
            .and_then(|d| d.storage_dir.as_deref())
            .unwrap_or(DEFAULT_DEMO_DIR);
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            // Relative to the project root
            lanes_dir.parent().unwrap_or(lanes_dir).join(path)
        }
    }
}

/// Find the .lanes directory by walking up from `start`.
pub fn find_lanes_dir(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let lanes_dir = current.join(LANES_DIR_NAME);
        if lanes_dir.join(CONFIG_FILE_NAME).is_file() {
            return Ok(lanes_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Initialize a new .lanes directory at the given path.
pub fn init_lanes_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let lanes_dir = path.join(LANES_DIR_NAME);

    if lanes_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(lanes_dir.display().to_string()));
    }
    if let Some(remote) = &config.remote {
        remote.validate_url()?;
    }

    fs::create_dir_all(&lanes_dir)?;
    config.save(&lanes_dir)?;
    fs::write(
        lanes_dir.join(GITIGNORE_FILE_NAME),
        "# Local demo board\ndemo/\n",
    )?;

    Ok(lanes_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
