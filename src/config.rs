//! Solver settings, read from TOML.
//!
//! ```toml
//! pool_limit = 2315
//! max_attempts = 6
//! pattern_cache = true
//! ```
//!
//! Every key is optional; missing keys take their default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many allowed guesses are scored by default: the size of the standard answer list.
pub const DEFAULT_POOL_LIMIT: usize = 2315;

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Only the first `pool_limit` allowed words are scored as guesses; 0 scores all of them.
    pub pool_limit: usize,
    pub max_attempts: usize,
    /// Memoize feedback patterns across rounds and sessions.
    pub pattern_cache: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pool_limit: DEFAULT_POOL_LIMIT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            pattern_cache: true,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
