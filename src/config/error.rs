//! Error type for configuration store operations

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory could be determined from the environment.
    #[error("could not determine the user home directory")]
    NoHomeDir,

    /// The config file could not be read or written.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid config document.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// No configured server carries the requested name.
    #[error("cannot find Jenkins by name {0}")]
    ServerNotFound(String),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}
