//! Error types shared across the workspace.

use thiserror::Error;

/// Failure talking to the remote user directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("directory responded with HTTP {0}")]
    Status(u16),

    #[error("could not decode directory response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
