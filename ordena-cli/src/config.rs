//! CLI configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | ORDENA_DATA_DIR | ./data | Directory holding the redb database |

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the database file
    pub data_dir: PathBuf,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("ORDENA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("ordena.redb")
    }
}
