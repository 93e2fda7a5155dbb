use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::ai::minimax::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::game::{GameState, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    /// Fresh game on a board of this size
    pub fn new_game(&self) -> Result<GameState, ConfigError> {
        GameState::new(self.rows, self.cols)
    }
}

/// Which decision policy the automated opponent uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Alpha-beta minimax search
    #[default]
    Minimax,
    /// Win if possible, else block, else random
    Shortcut,
    /// Uniformly random legal move
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub policy: Policy,
    /// Search depth in plies (minimax only)
    pub depth: usize,
    /// Seed for randomized policies; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            policy: Policy::Minimax,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub bot: BotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be >= 1".into()));
        }
        let cells = self.board.rows.checked_mul(self.board.cols);
        if !matches!(cells, Some(n) if n <= MAX_CELLS) {
            return Err(ConfigError::Validation(format!(
                "board must have at most {MAX_CELLS} cells"
            )));
        }
        if self.bot.depth == 0 {
            return Err(ConfigError::Validation("bot.depth must be >= 1".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| {
                ConfigError::Validation(format!("default config does not serialize: {e}"))
            })
    }
}
