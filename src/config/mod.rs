//! Configuration management for epubdb
//!
//! Settings come from an optional TOML file; every key has a default so an
//! empty or absent file is valid.

mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "epubdb.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database holding the `documents` table
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Document ID examined by `inspect`
    #[serde(default = "default_inspect_document_id")]
    pub inspect_document_id: i64,

    /// Default document ID for `debug`
    #[serde(default = "default_debug_document_id")]
    pub debug_document_id: i64,

    /// Default document ID for `seed`
    #[serde(default = "default_seed_document_id")]
    pub seed_document_id: i64,

    /// Preview length for pretty-printed metadata
    #[serde(default = "default_metadata_preview_chars")]
    pub metadata_preview_chars: usize,

    /// Preview length for chapter HTML content
    #[serde(default = "default_content_preview_chars")]
    pub content_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            inspect_document_id: default_inspect_document_id(),
            debug_document_id: default_debug_document_id(),
            seed_document_id: default_seed_document_id(),
            metadata_preview_chars: default_metadata_preview_chars(),
            content_preview_chars: default_content_preview_chars(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(config_path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", config_path);

        if !config_path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for a CLI run.
    ///
    /// An explicit path must exist. Without one, `epubdb.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            Self::load(&local)
        } else {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }

    /// Database path as a filesystem path
    pub fn db_file(&self) -> PathBuf {
        PathBuf::from(&self.db_path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.db_path.trim().is_empty() {
            return Err(Error::Config("db_path must not be empty".to_string()));
        }

        if self.metadata_preview_chars == 0 {
            return Err(Error::Config(
                "metadata_preview_chars must be positive".to_string(),
            ));
        }

        if self.content_preview_chars == 0 {
            return Err(Error::Config(
                "content_preview_chars must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
