// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  lanes init                     Initialize a demo board
  lanes show                     Show the board
  lanes move-card task-1 done 0  Move a card to the top of 'done'
  lanes undo                     Put it back";

#[derive(Parser)]
#[command(name = "lanes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reorder kanban columns and cards with optimistic updates")]
#[command(
    long_about = "Reorder kanban columns and cards with optimistic updates.\n\n\
    Moves are applied to the local board at once and persisted in the background, \
    either to a local demo board or to a remote board store."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Run as if lanes was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a board in the current directory (or specified path)
    #[command(after_help = "Examples:\n  \
        lanes init                                 Demo board stored under .lanes/demo\n  \
        lanes init --remote ws://host:7070 -b b1   Use a remote board store")]
    Init {
        /// Board id (defaults to the demo board)
        #[arg(long, short)]
        board: Option<String>,

        /// Board store URL (ws:// or wss://); omit for demo mode
        #[arg(long)]
        remote: Option<String>,

        /// Display name recorded in the config
        #[arg(long, short)]
        user: Option<String>,

        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Show the board
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Move a column to a new position
    #[command(arg_required_else_help = true)]
    MoveColumn {
        /// Column id
        column: String,

        /// Zero-based target position (clamped to the last column)
        to: usize,
    },

    /// Move a card into a column at a position
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        lanes move-card task-1 done 0       Top of 'done'\n  \
        lanes move-card task-2 todo 5       Bottom of 'todo' (clamped)"
    )]
    MoveCard {
        /// Card id
        card: String,

        /// Target column id
        column: String,

        /// Zero-based target position within the column
        index: usize,
    },

    /// Apply a raw drag-end event given as JSON
    #[command(after_help = "Example:\n  \
        lanes drop --event '{\"source\":{\"droppableId\":\"todo\",\"index\":0},\
\"destination\":{\"droppableId\":\"done\",\"index\":0},\"type\":\"CARD\",\"draggableId\":\"card-task-1\"}'")]
    Drop {
        /// Drag event JSON
        #[arg(long)]
        event: String,
    },

    /// Undo the last cross-column card move (demo mode)
    Undo,

    /// Restore the starter board (demo mode)
    Reset,

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
