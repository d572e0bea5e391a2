//! Impostor - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use impostor::{GameConfig, run_tui};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli
        .command
        .resolve_config()
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Play { .. } => run_tui(&config),
        Command::Words { .. } => count_words(&config),
    }
}

/// Validates the configured word list and prints its size.
#[instrument(skip(config))]
fn count_words(config: &GameConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let words = config.word_list().context("Failed to load word list")?;
    println!("{} words", words.len());
    Ok(())
}
