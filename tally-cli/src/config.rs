use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSection {
    /// Bank transaction export (CSV)
    pub transactions: PathBuf,
    /// Threshold rule file (CSV, single row)
    pub rules: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataSection {
                transactions: PathBuf::from("data/transactions.csv"),
                rules: PathBuf::from("data/rules.csv"),
            },
        }
    }
}

/// Load config from `path`, or from ./tally.toml when no path is given.
/// A missing file means defaults; a present but unreadable file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from("tally.toml"),
    };
    if !p.exists() {
        if path.is_some() {
            anyhow::bail!("config not found: {}", p.display());
        }
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}
