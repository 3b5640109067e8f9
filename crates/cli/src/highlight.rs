//! Highlight record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color applied when the caller does not pick one.
pub const DEFAULT_COLOR: &str = "#ffeb3b";

/// A persisted annotation request: a snippet of user-selected text paired
/// with a display color. The snippet is matched against documents at render
/// time; a highlight whose text no longer occurs anywhere is kept in the
/// store but simply does not appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Stable identifier, generated once at creation and never reused.
    pub id: Uuid,

    /// The selected text, trimmed of surrounding whitespace.
    pub text: String,

    /// Hex color token (e.g. "#ffeb3b").
    pub color: String,

    /// Creation timestamp. Informational only; matching ignores it.
    pub created_at: DateTime<Utc>,
}

impl Highlight {
    /// Create a new highlight with a fresh id and the current timestamp.
    ///
    /// The text is trimmed here so every stored record carries the exact
    /// form the matcher will search for.
    pub fn new(text: &str, color: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.trim().to_string(),
            color: color.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Length of the highlight text in characters, used for the
    /// longest-first ordering during injection.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod tests;
