//! Game configuration loaded from TOML.

use crate::words::{WordList, WordListError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "impostor.toml";

/// Configuration for a game table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Text file with one word per line. Uses the built-in list when unset.
    #[serde(default)]
    words_file: Option<PathBuf>,

    /// Players added to the roster at startup.
    #[serde(default)]
    players: Vec<String>,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("impostor.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_file: None,
            players: Vec::new(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            players = config.players.len(),
            words_file = ?config.words_file,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the word file.
    pub fn with_words_file(mut self, path: PathBuf) -> Self {
        self.words_file = Some(path);
        self
    }

    /// Appends players to the startup roster.
    pub fn with_players(mut self, players: impl IntoIterator<Item = String>) -> Self {
        self.players.extend(players);
        self
    }

    /// Resolves the configured word list.
    #[instrument(skip(self))]
    pub fn word_list(&self) -> Result<WordList, WordListError> {
        match &self.words_file {
            Some(path) => WordList::from_file(path),
            None => {
                debug!("Using built-in word list");
                Ok(WordList::builtin())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
