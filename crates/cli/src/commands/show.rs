// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use lanes_core::Board;

use super::Backend;
use crate::cli::OutputFormat;
use crate::display::format_board;
use crate::error::Result;

pub async fn run(start: &Path, output: OutputFormat) -> Result<()> {
    let backend = Backend::open(start).await?;
    println!("{}", render(&backend.board(), output)?);
    Ok(())
}

pub(crate) fn render(board: &Board, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_board(board)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(board)?),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
