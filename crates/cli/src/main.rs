// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use lanes::Cli;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LANES_LOG=lanes=debug`.
const LOG_ENV: &str = "LANES_LOG";

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    if let Err(e) = lanes::run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
