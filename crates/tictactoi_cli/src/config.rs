//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoi::{Difficulty, GameMode};
use tracing::{debug, info, instrument};

/// Opponent selection as written in config files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeChoice {
    /// Two humans at one keyboard.
    Friend,
    /// Human against the computer.
    #[default]
    Computer,
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Friend or computer opponent.
    #[getter(copy)]
    mode: ModeChoice,

    /// Computer strength.
    #[getter(copy)]
    difficulty: Difficulty,

    /// Where scores are persisted.
    score_file: PathBuf,

    /// Sound/haptic preference; only gates the terminal bell.
    #[getter(copy)]
    sound: bool,

    /// How long a move stays "transitioning" before the turn is handed over.
    #[getter(copy)]
    settle_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ModeChoice::default(),
            difficulty: Difficulty::default(),
            score_file: PathBuf::from("tictactoi_scores.toml"),
            sound: true,
            settle_ms: 250,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, falling back to defaults when it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = ?config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, mode: Option<ModeChoice>, difficulty: Option<Difficulty>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self
    }

    /// The engine's mode for a new round.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::Friend => GameMode::Friend,
            ModeChoice::Computer => GameMode::VsComputer(self.difficulty),
        }
    }

    /// Length of the transitioning window.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.game_mode(), GameMode::VsComputer(Difficulty::Medium));
        assert_eq!(config.settle_delay(), Duration::from_millis(250));
        assert!(config.sound());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("mode = \"friend\"\nsettle_ms = 0\n").unwrap();
        assert_eq!(config.game_mode(), GameMode::Friend);
        assert_eq!(config.settle_ms(), 0);
        assert_eq!(config.difficulty(), Difficulty::Medium);
        assert_eq!(config.score_file(), &PathBuf::from("tictactoi_scores.toml"));
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            mode = "computer"
            difficulty = "hard"
            score_file = "/tmp/scores.toml"
            sound = false
            settle_ms = 10
        "#;
        let config = AppConfig::from_toml(text).unwrap();
        assert_eq!(config.game_mode(), GameMode::VsComputer(Difficulty::Hard));
        assert!(!config.sound());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let err = AppConfig::from_toml("difficulty = \"nightmare\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(Some(ModeChoice::Friend), Some(Difficulty::Easy));
        assert_eq!(config.mode(), ModeChoice::Friend);
        assert_eq!(config.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
