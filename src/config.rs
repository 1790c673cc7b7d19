use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{check_dimension, SeriesSetup};

/// Board and series defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub games: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            columns: 7,
            games: 1,
        }
    }
}

/// Default player names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: String,
    pub second: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: "Player 1".to_string(),
            second: "Player 2".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw discs as colored glyphs instead of X and O.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { color: true }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: PlayersConfig,
    pub display: DisplayConfig,
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("game.rows", self.game.rows)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        check_dimension("game.columns", self.game.columns)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if self.game.games == 0 {
            return Err(ConfigError::Validation("game.games must be >= 1".into()));
        }
        if self.players.first.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first must not be empty".into(),
            ));
        }
        if self.players.second.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The setup offered to players before they change anything.
    pub fn default_setup(&self) -> SeriesSetup {
        SeriesSetup {
            player_names: [self.players.first.clone(), self.players.second.clone()],
            rows: self.game.rows,
            columns: self.game.columns,
            games: self.game.games,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
