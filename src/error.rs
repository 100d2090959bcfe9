use std::path::PathBuf;

/// Errors that end a game session early.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("failed to read player input: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to write game output: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
