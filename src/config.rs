use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ai::{Difficulty, HARD_DEPTH, MEDIUM_DEPTH};
use crate::error::ConfigError;

/// Deepest search the config accepts; deeper hard games get very slow.
pub const MAX_DEPTH: u32 = 9;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

/// Computer opponent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// "easy", "medium" or "hard"; anything else plays as medium. When unset
    /// the player is asked at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub medium_depth: u32,
    pub hard_depth: u32,
    /// Fixed seed for reproducible random moves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: None,
            medium_depth: MEDIUM_DEPTH,
            hard_depth: HARD_DEPTH,
            seed: None,
        }
    }
}

impl AiConfig {
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().map(Difficulty::parse_lenient)
    }
}

/// Game session settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Let the computer make the first move.
    pub ai_first: bool,
    /// Write a JSON record of the game here when it ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
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
        if self.ai.medium_depth == 0 {
            return Err(ConfigError::Validation(
                "ai.medium_depth must be >= 1".into(),
            ));
        }
        if self.ai.hard_depth == 0 {
            return Err(ConfigError::Validation(
                "ai.hard_depth must be >= 1".into(),
            ));
        }
        if self.ai.medium_depth > MAX_DEPTH || self.ai.hard_depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai search depths must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
