//! Failures loading configs and reading or writing result files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfplayError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid results file: {0}")]
    Results(#[from] serde_json::Error),
}
