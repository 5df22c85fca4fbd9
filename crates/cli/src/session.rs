// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The current user and the board they are working on.
//!
//! A [`Session`] is resolved once by the shell and handed to a coordinator
//! at construction.

use std::process::Command;

use crate::config::Config;

/// Environment variable that names the current user.
pub const USER_ENV: &str = "LANES_USER";

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

/// The user and board a coordinator acts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub board_id: String,
}

impl Session {
    pub fn new(user: User, board_id: impl Into<String>) -> Self {
        Session {
            user,
            board_id: board_id.into(),
        }
    }
}

/// Returns the current user, if one can be determined.
///
/// Resolution order:
/// 1. `user` from the project config
/// 2. `LANES_USER`
/// 3. Git config user.name (display name only, never email)
/// 4. Unix username from USER or LOGNAME env var (if not system account)
pub fn current_user(config: &Config) -> Option<User> {
    config
        .user
        .clone()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| non_empty_env(USER_ENV))
        .or_else(git_user_name)
        .or_else(|| unix_username().filter(|name| !is_system_account(name)))
        .map(|name| User { name })
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if output.status.success() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

fn unix_username() -> Option<String> {
    non_empty_env("USER").or_else(|| non_empty_env("LOGNAME"))
}

fn is_system_account(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "root" | "system" | "administrator" | "admin" | "daemon" | "nobody"
    )
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
