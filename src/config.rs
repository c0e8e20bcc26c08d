use std::path::PathBuf;

use thiserror::Error;

use crate::infrastructure::seed::{Seed, SeedError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid number, got {0:?}")]
    InvalidPort(String),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Process settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `HOST` defaults to `0.0.0.0`, `PORT` to 8080.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };
        let seed_file = lookup("SEED_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed_file,
        })
    }

    /// The configured seed, or an empty one when `SEED_FILE` is unset.
    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_file {
            Some(path) => Ok(Seed::load(path)?),
            None => Ok(Seed::default()),
        }
    }
}
