// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight matching and marker injection.
//!
//! Two phases per highlight, first success wins:
//!
//! 1. Exact: literal, case-sensitive substring search. Every occurrence
//!    outside an existing marker is wrapped whole.
//! 2. Fuzzy: the highlight text is split into words and matched in order,
//!    tolerating runs of markdown syntax characters between words. Only
//!    the words themselves are wrapped; the syntax characters stay outside
//!    the markers so the document still renders as markdown.
//!
//! Highlights are processed longest-text-first so a short highlight can
//! never carve up a longer one's match region. One bad highlight never
//! aborts the batch: its failure is recorded in the [`ApplyReport`] and
//! processing continues.

pub mod marker;
pub mod pattern;

use std::ops::Range;

use memchr::memmem;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use crate::highlight::Highlight;
use self::marker::MarkerKind;

/// Failure while matching a single highlight.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The constructed search pattern did not compile.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// What happened to one highlight during an apply pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchStatus {
    /// Literal occurrences found. `spans` counts newly wrapped occurrences;
    /// zero means every occurrence was already inside a marker.
    Exact { spans: usize },
    /// Word-sequence matches found across markdown syntax.
    Fuzzy { spans: usize },
    /// Neither phase found an occurrence. Expected steady-state for
    /// highlights whose source text was edited away.
    NoMatch,
    /// Blank highlight text; nothing to search for.
    EmptyText,
    /// Matching failed; the document was left unchanged for this highlight.
    Failed { error: String },
}

impl MatchStatus {
    /// Whether this outcome wrapped at least one span.
    pub fn marked(&self) -> bool {
        matches!(
            self,
            MatchStatus::Exact { spans } | MatchStatus::Fuzzy { spans } if *spans > 0
        )
    }
}

/// Per-highlight outcome, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightOutcome {
    pub id: Uuid,
    pub text: String,
    #[serde(flatten)]
    pub status: MatchStatus,
}

/// Aggregate outcome report for one apply pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    pub outcomes: Vec<HighlightOutcome>,
}

impl ApplyReport {
    /// Highlights that wrapped at least one span.
    pub fn marked(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.marked()).count()
    }

    /// Highlights that found no occurrence in the document.
    pub fn unmatched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == MatchStatus::NoMatch)
            .count()
    }

    /// Highlights skipped for blank text or a matching failure.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    MatchStatus::EmptyText | MatchStatus::Failed { .. }
                )
            })
            .count()
    }
}

/// Annotated document plus the per-highlight report.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub document: String,
    pub report: ApplyReport,
}

/// The injection engine. Pure over its inputs; holds no document state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Injector;

impl Injector {
    pub fn new() -> Self {
        Self
    }

    /// Inject markers for every highlight into `document`.
    ///
    /// Returns the annotated text and a per-highlight report. The input is
    /// returned unchanged when `highlights` is empty, and outside matched
    /// regions the output is byte-identical to the input.
    pub fn apply(&self, document: &str, highlights: &[Highlight]) -> ApplyOutcome {
        if highlights.is_empty() {
            return ApplyOutcome {
                document: document.to_string(),
                report: ApplyReport::default(),
            };
        }

        // Longest text first; the sort is stable so equal-length texts keep
        // their insertion order.
        let mut order: Vec<(usize, &Highlight)> =
            highlights.iter().map(|h| (h.text_len(), h)).collect();
        order.sort_by(|a, b| b.0.cmp(&a.0));

        let mut document = document.to_string();
        let mut outcomes = Vec::with_capacity(order.len());

        for (_, highlight) in order {
            let status = match self.inject_one(&document, highlight) {
                Ok((next, status)) => {
                    document = next;
                    status
                }
                Err(e) => {
                    tracing::warn!(text = %highlight.text, error = %e, "highlight skipped");
                    MatchStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };
            tracing::debug!(id = %highlight.id, ?status, "highlight processed");
            outcomes.push(HighlightOutcome {
                id: highlight.id,
                text: highlight.text.clone(),
                status,
            });
        }

        ApplyOutcome {
            document,
            report: ApplyReport { outcomes },
        }
    }

    /// Run both phases for one highlight against the current document.
    fn inject_one(
        &self,
        document: &str,
        highlight: &Highlight,
    ) -> Result<(String, MatchStatus), MatchError> {
        let text = highlight.text.trim();
        if text.is_empty() {
            return Ok((document.to_string(), MatchStatus::EmptyText));
        }

        let regions = marker::regions(document);

        // Exact phase: literal, case-sensitive. Hits inside an existing
        // marker are skipped so re-application never nests tags.
        let hits: Vec<usize> = memmem::find_iter(document.as_bytes(), text.as_bytes()).collect();
        if !hits.is_empty() {
            let mut out = String::with_capacity(document.len() + hits.len() * 64);
            let mut last = 0;
            let mut wrapped = 0;
            for start in hits {
                let end = start + text.len();
                if intersects(&regions, start, end) {
                    continue;
                }
                out.push_str(&document[last..start]);
                out.push_str(&marker::wrap(
                    &document[start..end],
                    &highlight.color,
                    MarkerKind::Phrase,
                ));
                last = end;
                wrapped += 1;
            }
            out.push_str(&document[last..]);
            return Ok((out, MatchStatus::Exact { spans: wrapped }));
        }

        // Fuzzy phase: match the words in order, case-insensitively, with
        // markdown syntax allowed between them.
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Ok((document.to_string(), MatchStatus::EmptyText));
        }
        let sequence = pattern::ordered_words(&words)?;
        let word_patterns: Vec<Regex> = words
            .iter()
            .map(|w| pattern::single_word(w))
            .collect::<Result<_, _>>()?;

        let mut out = String::with_capacity(document.len());
        let mut last = 0;
        let mut wrapped = 0;
        let mut found = false;
        for m in sequence.find_iter(document) {
            found = true;
            let span = m.as_str();
            if intersects(&regions, m.start(), m.end()) || span.contains(marker::MARK_OPEN) {
                continue;
            }
            match wrap_each_word(span, &word_patterns, &highlight.color) {
                Some(rewritten) => {
                    out.push_str(&document[last..m.start()]);
                    out.push_str(&rewritten);
                    last = m.end();
                    wrapped += 1;
                }
                // The sequence pattern just matched this span, so every
                // word should re-locate. Kept as a safety net only.
                None => {
                    tracing::warn!(text, matched = span, "word relocation failed; span left unchanged");
                }
            }
        }
        if !found {
            return Ok((document.to_string(), MatchStatus::NoMatch));
        }
        out.push_str(&document[last..]);
        Ok((out, MatchStatus::Fuzzy { spans: wrapped }))
    }
}

/// Wrap each word of a fuzzy-matched span in its own marker, copying the
/// separator text between words through unchanged.
///
/// Words are located in order, each search starting strictly after the
/// previous word's end. Returns `None` if a word cannot be re-located.
fn wrap_each_word(span: &str, words: &[Regex], color: &str) -> Option<String> {
    let mut out = String::with_capacity(span.len() + words.len() * 64);
    let mut pos = 0;
    for word in words {
        let m = word.find_at(span, pos)?;
        out.push_str(&span[pos..m.start()]);
        out.push_str(&marker::wrap(m.as_str(), color, MarkerKind::Word));
        pos = m.end();
    }
    out.push_str(&span[pos..]);
    Some(out)
}

/// Whether the half-open range `start..end` overlaps any existing marker.
fn intersects(regions: &[Range<usize>], start: usize, end: usize) -> bool {
    regions.iter().any(|r| start < r.end && r.start < end)
}

/// Convenience wrapper returning only the annotated text.
pub fn apply(document: &str, highlights: &[Highlight]) -> String {
    Injector::new().apply(document, highlights).document
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
