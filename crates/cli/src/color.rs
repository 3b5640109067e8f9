// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight color tokens and terminal styling.
//!
//! Two color concerns live here:
//! - resolving user color input (palette name or `#rrggbb`) into the hex
//!   token stored on a highlight;
//! - deciding whether `limn list` output gets ANSI styling, following the
//!   NO_COLOR/COLOR/TTY convention.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Named palette offered to users, mirroring the editor's color buttons.
/// First entry is the default.
pub const PALETTE: &[(&str, &str)] = &[
    ("yellow", "#ffeb3b"),
    ("green", "#8bc34a"),
    ("pink", "#ff80ab"),
    ("blue", "#64b5f6"),
    ("orange", "#ff9800"),
];

/// Resolve user color input into a hex token.
///
/// Accepts a palette name (case-insensitive) or a literal `#rrggbb` value.
/// Returns `None` for anything else.
pub fn resolve_token(input: &str) -> Option<String> {
    let trimmed = input.trim();
    for (name, hex) in PALETTE {
        if trimmed.eq_ignore_ascii_case(name) {
            return Some((*hex).to_string());
        }
    }
    if is_hex_color(trimmed) {
        return Some(trimmed.to_ascii_lowercase());
    }
    None
}

/// Whether `s` is a `#rrggbb` hex color token.
fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a `#rrggbb` token into RGB components, for terminal swatches.
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any
/// value (including empty string) disables color. The `COLOR` env var
/// follows a similar convention for forcing color output.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for list output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use super::parse_hex;

    /// Cyan highlight id.
    pub fn id() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Dim timestamp.
    pub fn stamp() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    /// Swatch painted with the highlight's own color.
    pub fn swatch(hex: &str) -> ColorSpec {
        let mut spec = ColorSpec::new();
        if let Some((r, g, b)) = parse_hex(hex) {
            spec.set_bg(Some(Color::Rgb(r, g, b)));
        }
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
