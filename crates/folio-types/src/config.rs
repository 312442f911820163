//! Terminal session configuration.
//!
//! Loaded from a `folio.toml` file; every field has a default so an empty
//! file (or no file at all) yields a working session.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Per-session settings for the interpreter.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// User name shown in the prompt.
    #[serde(default = "default_user")]
    pub user: String,
    /// Host name shown in the prompt.
    #[serde(default = "default_hostname")]
    pub hostname: String,
    /// Owner and group shown by `ls -l`.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Upper bound on alias re-expansion passes per line.
    #[serde(default = "default_max_alias_depth")]
    pub max_alias_depth: usize,
    /// Depth used by `tree` when `-L` is not given.
    #[serde(default = "default_tree_depth")]
    pub tree_depth: usize,
    /// Environment variables present at session start.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Aliases present at session start.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Message printed when the session opens.
    #[serde(default)]
    pub motd: Option<String>,
}

fn default_user() -> String {
    "guest".to_string()
}

fn default_hostname() -> String {
    "folio".to_string()
}

fn default_owner() -> String {
    "guest".to_string()
}

fn default_max_alias_depth() -> usize {
    8
}

fn default_tree_depth() -> usize {
    3
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            hostname: default_hostname(),
            owner: default_owner(),
            max_alias_depth: default_max_alias_depth(),
            tree_depth: default_tree_depth(),
            env: BTreeMap::new(),
            aliases: BTreeMap::new(),
            motd: None,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.max_alias_depth == 0 {
            return Err(FolioError::Config(
                "max_alias_depth must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config ({}): {e}", path.display());
                Self::default()
            },
        }
    }
}
