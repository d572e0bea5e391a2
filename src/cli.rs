//! Command-line interface for impostor.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use impostor::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

/// Impostor - pass-the-device party game
#[derive(Parser, Debug)]
#[command(name = "impostor")]
#[command(about = "Find the impostor among your friends", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on this terminal
    Play {
        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Word file (one word per line), overrides the config
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Player to add before the game starts (repeatable)
        #[arg(short, long = "player")]
        players: Vec<String>,
    },

    /// Check a word list and print how many words it holds
    Words {
        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Word file (one word per line), overrides the config
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
}

impl Command {
    /// Loads the config named on the command line and applies overrides.
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        match self {
            Command::Play {
                config,
                words,
                players,
            } => {
                let mut resolved = GameConfig::load_or_default(config)?;
                if let Some(words) = words {
                    resolved = resolved.with_words_file(words.clone());
                }
                Ok(resolved.with_players(players.iter().cloned()))
            }
            Command::Words { config, words } => {
                let resolved = GameConfig::load_or_default(config)?;
                Ok(match words {
                    Some(words) => resolved.with_words_file(words.clone()),
                    None => resolved,
                })
            }
        }
    }
}
