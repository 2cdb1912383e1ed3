//! nestwalk CLI
//!
//! Builds composite trees in memory and flattens them with the pull-based
//! leaf iterator or the push-based visitor.

mod cli;
mod commands;
mod output;
mod samples;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_mismatch) => {
            if has_mismatch {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Flatten { tree, format } => commands::run_flatten(tree, *format).map(|_| false),
        Commands::Links { tree, format } => commands::run_links(tree, *format).map(|_| false),
        Commands::Check { tree } => commands::run_check(tree),
    }
}
