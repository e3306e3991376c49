//! Errors for the edges of the editor that touch the outside world.
//! Editing itself never fails; bad input is ignored.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize room layout: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write room layout to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
