// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered-word pattern construction for the fuzzy phase.
//!
//! A highlight like "very important" must still match
//! `**very** important` or `# Very important`, where markdown syntax sits
//! between the words. The pattern built here matches the words in order
//! with any run of allowed separator characters between consecutive words.

use regex::{Regex, RegexBuilder};

/// Character class matching one-or-more separator characters between
/// consecutive words: whitespace plus the markdown syntax characters for
/// emphasis, headings, lists, quotes, and inline code.
pub const SEPARATOR_CLASS: &str = r"[\s*_\-#`>.]+";

/// Build a case-insensitive pattern matching `words` in order, separated
/// by runs of allowed separator characters.
///
/// Each word is escaped, so user-selected text is always treated as
/// literal content rather than as a pattern.
pub fn ordered_words(words: &[&str]) -> Result<Regex, regex::Error> {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    RegexBuilder::new(&escaped.join(SEPARATOR_CLASS))
        .case_insensitive(true)
        .build()
}

/// Build a case-insensitive literal pattern for a single word, used to
/// re-locate each word inside a span the full sequence already matched.
pub fn single_word(word: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
