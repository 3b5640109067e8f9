// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight collection persistence.
//!
//! The whole collection lives in a single JSON file and is rewritten on
//! every mutation. Reads never fail the caller: a missing or corrupt store
//! degrades to an empty collection with a logged warning. Writes propagate
//! errors, since silently losing user annotations is worse than surfacing
//! an I/O failure.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::highlight::Highlight;

/// Store file name under the default store directory.
pub const STORE_FILE_NAME: &str = "highlights.json";

/// Default store location relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = ".limn";

/// On-disk shape: the full collection plus a last-updated stamp,
/// overwritten wholesale on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFile {
    pub highlights: Vec<Highlight>,
    pub last_updated: DateTime<Utc>,
}

/// Store file status for display.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub path: PathBuf,
    pub exists: bool,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Blank highlight text, rejected at the add boundary.
    #[error("highlight text is empty")]
    EmptyText,

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write store: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to one persisted highlight collection.
///
/// The path is fixed at construction; there is no process-global store
/// location. No locking is performed: a single active session per store
/// file is assumed, and concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct HighlightStore {
    path: PathBuf,
}

impl HighlightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection.
    ///
    /// A missing file is the normal first-run state and yields an empty
    /// collection. An unreadable or corrupt file also yields an empty
    /// collection, with the cause logged; it is never propagated.
    pub fn load(&self) -> Vec<Highlight> {
        match self.read_file() {
            Ok(Some(file)) => file.highlights,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to load store; starting empty");
                Vec::new()
            }
        }
    }

    /// Write the full collection with a refreshed `last_updated` stamp.
    ///
    /// The file is written to a temporary sibling and renamed into place,
    /// so a crash mid-write cannot leave a truncated store behind.
    pub fn save(&self, highlights: &[Highlight]) -> Result<(), StoreError> {
        let file = StoreFile {
            highlights: highlights.to_vec(),
            last_updated: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), count = highlights.len(), "store saved");
        Ok(())
    }

    /// Create a highlight, append it to `highlights`, and persist.
    ///
    /// Blank text is rejected; the collection and the store file are left
    /// untouched in that case.
    pub fn add(
        &self,
        text: &str,
        color: &str,
        highlights: &mut Vec<Highlight>,
    ) -> Result<Highlight, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let highlight = Highlight::new(text, color);
        highlights.push(highlight.clone());
        self.save(highlights)?;
        Ok(highlight)
    }

    /// Remove the highlight with `id`, persisting only if something was
    /// removed. Returns whether the collection shrank; an unknown id is a
    /// no-op, not an error.
    pub fn remove(&self, id: Uuid, highlights: &mut Vec<Highlight>) -> Result<bool, StoreError> {
        let before = highlights.len();
        highlights.retain(|h| h.id != id);
        if highlights.len() < before {
            self.save(highlights)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Store file status: existence, size, and last-updated stamp.
    pub fn status(&self) -> StoreStatus {
        let size = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        let last_updated = match self.read_file() {
            Ok(Some(file)) => Some(file.last_updated),
            _ => None,
        };
        StoreStatus {
            path: self.path.clone(),
            exists: self.path.exists(),
            size,
            last_updated,
        }
    }

    fn read_file(&self) -> Result<Option<StoreFile>, ReadError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ReadError::Io)?;
        let file: StoreFile = serde_json::from_str(&content).map_err(ReadError::Parse)?;
        Ok(Some(file))
    }
}

/// Internal read failure; always recovered to an empty collection.
#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error("io error: {0}")]
    Io(std::io::Error),

    #[error("parse error: {0}")]
    Parse(serde_json::Error),
}

/// Format a byte count for human-readable status output.
pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
