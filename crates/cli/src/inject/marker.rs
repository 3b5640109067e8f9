// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Marker tag construction, detection, and removal.
//!
//! Injected markers are inline `<mark>` spans carrying a background-color
//! style, so annotated markdown still renders as markdown everywhere else.
//! Phrase markers (exact matches) get wider padding than word markers
//! (fuzzy matches) so a run of per-word markers reads as one phrase.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Opening token shared by every injected marker. A span that already
/// contains this token is never wrapped again.
pub const MARK_OPEN: &str = "<mark";

/// Closing token for injected markers.
pub const MARK_CLOSE: &str = "</mark>";

/// Matches one injected marker pair and captures the wrapped text.
/// `(?s)` lets phrase markers span line breaks; markers never nest, so the
/// lazy body always stops at the marker's own closing tag.
#[allow(clippy::expect_used)]
static MARKER_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<mark style="background-color: [^"]*">(.*?)</mark>"#).expect("valid regex")
});

/// How a marker wraps its matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A whole matched phrase (exact phase).
    Phrase,
    /// A single word inside a fuzzy match.
    Word,
}

/// Wrap `text` in a marker pair carrying `color`.
///
/// The wrapped content is the document substring that matched, not the
/// highlight's own text; after a case-insensitive fuzzy match the two can
/// differ in case.
pub fn wrap(text: &str, color: &str, kind: MarkerKind) -> String {
    let trim = match kind {
        MarkerKind::Phrase => "padding: 2px 4px; border-radius: 3px;",
        MarkerKind::Word => "padding: 2px 0; border-radius: 2px;",
    };
    format!(r#"<mark style="background-color: {color}; {trim}">{text}</mark>"#)
}

/// Byte ranges of every marker pair already present in `document`.
///
/// The exact phase uses these to skip literal hits that fall inside an
/// existing marker, which keeps re-application from nesting tags.
pub fn regions(document: &str) -> Vec<Range<usize>> {
    MARKER_PAIR
        .find_iter(document)
        .map(|m| m.start()..m.end())
        .collect()
}

/// Remove every injected marker pair, keeping the wrapped text.
///
/// Only markers in this module's own format are touched; other HTML in the
/// document passes through unchanged. For a document that contained no
/// markers, `strip(apply(doc, h))` returns `doc`.
pub fn strip(document: &str) -> String {
    MARKER_PAIR.replace_all(document, "$1").into_owned()
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
