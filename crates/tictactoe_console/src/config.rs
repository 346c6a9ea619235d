//! Game configuration loaded from TOML and overridden from the CLI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Difficulty;
use tracing::{debug, info, instrument};

/// Settings for a game. Anything left unset is asked for on the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Name of the human player.
    #[serde(default)]
    player_name: Option<String>,

    /// Opponent tier, 0-3.
    #[serde(default)]
    difficulty: Option<u8>,

    /// Seed for the random opponent.
    #[serde(default)]
    seed: Option<u64>,
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

        if let Some(level) = config.difficulty
            && level > 3
        {
            return Err(ConfigError::new(format!(
                "Difficulty must be between 0 and 3, got {}",
                level
            )));
        }

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces file values with any that were given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_name: Option<String>,
        difficulty: Option<u8>,
        seed: Option<u64>,
    ) -> Self {
        if player_name.is_some() {
            self.player_name = player_name;
        }
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Configured difficulty tier, if any.
    pub fn difficulty_tier(&self) -> Option<Difficulty> {
        self.difficulty.map(Difficulty::from_level)
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
