//! Match configuration, read from TOML

use std::path::{Path, PathBuf};

use search_engine::Strategy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SelfplayError;

/// Configuration for a match. Keys missing from the file take their
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Seed for the random strategy (None = entropy)
    pub seed: Option<u64>,
    /// Strategy of the first engine, white in game one
    pub white: Strategy,
    /// Strategy of the second engine
    pub black: Strategy,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Where to write the JSON results
    pub output: Option<PathBuf>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 2,
            max_moves: 200,
            seed: None,
            white: Strategy::Greedy,
            black: Strategy::Random,
            alternate_colors: true,
            output: None,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SelfplayError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, SelfplayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SelfplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` if given and present, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SelfplayError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                warn!(path = %path.display(), "config not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
