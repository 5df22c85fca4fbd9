// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lanes-remote: authoritative board store for lanes clients.
//!
//! Serves boards over WebSocket and applies column and card moves with the
//! same ordering rules the clients use for their optimistic updates.

mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use state::ServerState;

/// lanes-remote: board store server
#[derive(Parser, Debug)]
#[command(name = "lanes-remote")]
#[command(about = "WebSocket board store for lanes clients")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "0.0.0.0:7070")]
    bind: SocketAddr,

    /// JSON file holding the boards (in-memory only when omitted)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Refuse every move request
    #[arg(long)]
    reject_moves: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting lanes-remote server");
    info!("  Bind address: {}", args.bind);

    let state = match &args.data {
        Some(path) => {
            info!("  Data file: {}", path.display());
            ServerState::open(path)?
        }
        None => {
            info!("  Data file: none (in-memory)");
            ServerState::seeded()
        }
    };
    if args.reject_moves {
        info!("  Rejecting all moves");
        state.set_reject_moves(true);
    }

    server::run(args.bind, state).await?;

    Ok(())
}
