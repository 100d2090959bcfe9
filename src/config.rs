use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::render::Symbols;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Response that ends the game, compared case-insensitively.
    pub quit_token: String,
    /// Print the rules banner before the first board.
    pub show_intro: bool,
    pub symbols: Symbols,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            quit_token: "QUIT".to_string(),
            show_intro: true,
            symbols: Symbols::default(),
        }
    }
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
        let Symbols {
            empty,
            player_x,
            player_o,
        } = self.symbols;

        if [empty, player_x, player_o].iter().any(|c| c.is_control()) {
            return Err(ConfigError::Validation(
                "symbols must be printable characters".into(),
            ));
        }
        if player_x.is_whitespace() || player_o.is_whitespace() {
            return Err(ConfigError::Validation(
                "symbols.player_x and symbols.player_o must not be whitespace".into(),
            ));
        }
        if empty == player_x || empty == player_o || player_x == player_o {
            return Err(ConfigError::Validation(
                "symbols.empty, symbols.player_x and symbols.player_o must be distinct".into(),
            ));
        }

        let token = self.quit_token.trim();
        if token.is_empty() {
            return Err(ConfigError::Validation("quit_token must not be empty".into()));
        }
        if token.parse::<i64>().is_ok() {
            return Err(ConfigError::Validation(
                "quit_token must not be a number".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
