use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::dish::Dish;
use crate::domain::order::Order;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Records the stores start with. Seeded records keep their ids.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Seed {
    /// Read a JSON document shaped `{ "dishes": [...], "orders": [...] }`.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
