//! ztrack configuration.
//!
//! Loaded from `~/.ztrack/config.toml` when present. Every key is optional:
//!
//! ```toml
//! language = "cs"
//! color = false
//! host = "https://tracking.packeta.com"
//! ```
//!
//! Command-line flags take precedence over anything set here.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::{Deserialize, Serialize};

use crate::model::Language;
use crate::track::DEFAULT_HOST;

/// ztrack configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Language used when `--language` is not given.
    pub language: Language,

    /// Whether error lines are highlighted.
    pub color: bool,

    /// Tracking host, without a trailing path.
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            color: true,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl Config {
    /// Load config from `~/.ztrack/config.toml`.
    /// Falls back to defaults when there is no home directory or no file.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults;
    /// an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.ztrack/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".ztrack").join("config.toml"))
    }
}
