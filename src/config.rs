// src/config.rs
//! Local settings from `coauthor.toml`, with defaults matching the original
//! sampling setup (50 articles per session).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "coauthor.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-category snapshot files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Articles drawn per session.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `coauthor.toml` from the working directory. Missing or
    /// malformed files fall back to defaults; local settings never abort a
    /// run.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sample_size: default_sample_size(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("article_data")
}

fn default_sample_size() -> usize {
    50
}
