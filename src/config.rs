//! Application configuration loaded from TOML.
//!
//! The path comes from `TETRIMINO_CONFIG`, else `tetrimino.toml` in the
//! working directory. A missing file means defaults; a malformed one is an
//! error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;
use crate::types::TICK_MS;

pub const CONFIG_ENV_VAR: &str = "TETRIMINO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "tetrimino.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Piece definitions file; the built-in catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// Piece generator seed; taken from the clock when unset
    pub seed: Option<u32>,
    pub frame_ms: u32,
    /// How long the end screen stays up
    pub game_over_delay_ms: u64,
    pub log_file: PathBuf,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            seed: None,
            frame_ms: TICK_MS,
            game_over_delay_ms: 5000,
            log_file: PathBuf::from("tetrimino.log"),
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the environment-selected path, or the default file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be positive"));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_file_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {err}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_engine_table() {
        let config = AppConfig::parse(
            r#"
            seed = 7
            game_over_delay_ms = 0

            [engine]
            start_level = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.game_over_delay_ms, 0);
        assert_eq!(config.engine.start_level, 3);
        assert_eq!(config.engine.base_move_ms, 500);
        assert_eq!(config.frame_ms, TICK_MS);
    }

    #[test]
    fn test_zero_frame_is_rejected() {
        assert!(matches!(
            AppConfig::parse("frame_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(
            AppConfig::parse("seed = \"abc\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
