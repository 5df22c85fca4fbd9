// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use super::open_demo;
use crate::error::Result;

pub fn undo(start: &Path) -> Result<()> {
    let demo = open_demo(start, "undo")?;
    match demo.undo()? {
        Some(request) => println!("Undone: {}", request),
        None => println!("Nothing to undo"),
    }
    Ok(())
}

pub fn reset(start: &Path) -> Result<()> {
    let demo = open_demo(start, "reset")?;
    demo.reset()?;
    println!("Demo board reset");
    Ok(())
}
