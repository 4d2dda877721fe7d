//! Configuration file loading for the terminal front end.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured log level is not a tracing level.
    #[error("Unknown log level: {0}")]
    BadLogLevel(String),
}

/// Front end settings, read from `chess.toml` by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Starting placement in FEN. Defaults to the standard setup.
    #[serde(default)]
    pub start_fen: Option<String>,
    /// How many of the latest moves `history` prints. Defaults to 15.
    #[serde(default = "default_history_len")]
    pub history_len: usize,
    /// Tracing level for stderr logging. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print the legal destinations after a `moves` query and after each
    /// rejected move. Defaults to true.
    #[serde(default = "default_true")]
    pub show_legal_moves: bool,
}

fn default_history_len() -> usize {
    15
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start_fen: None,
            history_len: default_history_len(),
            log_level: default_log_level(),
            show_legal_moves: true,
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`, or from [`Self::default_path`]
    /// when none is given.
    ///
    /// A missing default file yields the default configuration; a missing
    /// file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns `chess.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Returns the configured log level.
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::BadLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
start_fen = "4k3/8/8/8/8/8/8/4K3 w"
history_len = 30
log_level = "debug"
show_legal_moves = false
"#;
        let config: CliConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.start_fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w"));
        assert_eq!(config.history_len, 30);
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::DEBUG);
        assert!(!config.show_legal_moves);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.history_len, 15);
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::WARN);
    }

    #[test]
    fn test_bad_log_level() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.tracing_level(),
            Err(ConfigError::BadLogLevel(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let result: Result<CliConfig, _> = toml::from_str("history_len = \"many\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/chess.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
