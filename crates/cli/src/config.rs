// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles limn.toml parsing with version validation and unknown key
//! warnings. Every setting has a built-in default; the config file, when
//! present, only overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::highlight::DEFAULT_COLOR;
use crate::store::{DEFAULT_STORE_DIR, STORE_FILE_NAME};

/// Config file name discovered in the working directory or its ancestors.
pub const CONFIG_FILE_NAME: &str = "limn.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "store", "highlight"];

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Highlight defaults.
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// Store location configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file.
    pub path: Option<PathBuf>,
}

/// Highlight defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HighlightConfig {
    /// Color applied when `add` is called without one.
    pub default_color: Option<String>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    store: Option<StoreConfig>,

    #[serde(default)]
    highlight: Option<HighlightConfig>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

impl Config {
    /// Store file path: configured or the built-in default.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_STORE_DIR).join(STORE_FILE_NAME))
    }

    /// Default highlight color: configured or the built-in default.
    pub fn default_color(&self) -> &str {
        self.highlight
            .default_color
            .as_deref()
            .unwrap_or(DEFAULT_COLOR)
    }
}

/// Find a config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    Ok(Config {
        version: flexible.version,
        store: flexible.store.unwrap_or_default(),
        highlight: flexible.highlight.unwrap_or_default(),
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "limn: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
