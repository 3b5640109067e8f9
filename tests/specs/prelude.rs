//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use assert_cmd::Command;
pub use predicates;
pub use predicates::prelude::Predicate;

pub use limn::{Highlight, HighlightStore};

/// Returns a Command configured to run the limn binary
pub fn limn_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("limn"));
    // Isolate specs from the developer's own environment.
    cmd.env_remove("LIMN_STORE");
    cmd.env_remove("LIMN_CONFIG");
    cmd.env_remove("LIMN_LOG");
    cmd
}

/// An isolated working directory with its own store file.
pub struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("highlights.json")
    }

    /// A limn command running inside the sandbox against its store.
    pub fn cmd(&self) -> Command {
        let mut cmd = limn_cmd();
        cmd.current_dir(self.dir.path());
        cmd.arg("--store").arg(self.store_path());
        cmd
    }

    /// A limn command running inside the sandbox without a store flag,
    /// for specs covering config discovery and defaults.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = limn_cmd();
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Write a file into the sandbox, returning its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Read a file from the sandbox.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// Seed the store with `(text, color)` records, returning them so
    /// specs can refer to generated ids.
    pub fn seed(&self, entries: &[(&str, &str)]) -> Vec<Highlight> {
        let highlights: Vec<Highlight> = entries
            .iter()
            .map(|(text, color)| Highlight::new(text, color))
            .collect();
        HighlightStore::new(self.store_path())
            .save(&highlights)
            .unwrap();
        highlights
    }
}
