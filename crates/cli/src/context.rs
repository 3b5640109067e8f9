// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared command context: config discovery and store resolution.
//!
//! Precedence for the store path: `--store` flag (or `LIMN_STORE`), then
//! the config file, then the built-in default.

use limn::cli::Cli;
use limn::config::{self, Config};
use limn::error::{Error, Result};
use limn::store::HighlightStore;

/// Load configuration: the explicit `-C` path if given, otherwise the
/// first `limn.toml` found walking up from the working directory,
/// otherwise defaults.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loading config");
        return config::load(path);
    }

    let cwd = std::env::current_dir()
        .map_err(|e| Error::Internal(format!("cannot determine working directory: {e}")))?;

    match config::find_config(&cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading discovered config");
            config::load(&path)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Open the highlight store selected by flags and config.
pub fn open_store(cli: &Cli, config: &Config) -> HighlightStore {
    let path = cli.store.clone().unwrap_or_else(|| config.store_path());
    HighlightStore::new(path)
}
