// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List command implementation.

use std::io::Write;

use serde::Serialize;
use termcolor::{StandardStream, WriteColor};

use limn::cli::{Cli, ListArgs, OutputFormat};
use limn::color::{resolve_color, scheme};
use limn::error::{Error, ExitCode};
use limn::highlight::Highlight;
use limn::store::{StoreStatus, human_size};

use crate::context;

/// JSON payload for `list --format json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    highlights: &'a [Highlight],
    store: &'a StoreStatus,
}

/// Run the list command.
pub fn run(cli: &Cli, args: &ListArgs) -> anyhow::Result<ExitCode> {
    let config = context::load_config(cli)?;
    let store = context::open_store(cli, &config);

    let highlights = store.load();
    let status = store.status();

    match args.format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&JsonOutput {
                highlights: &highlights,
                store: &status,
            })
            .map_err(|e| Error::Internal(e.to_string()))?;
            println!("{payload}");
        }
        OutputFormat::Text => {
            print_text(&highlights, &status)
                .map_err(|e| Error::Internal(format!("failed to write stdout: {e}")))?;
        }
    }

    Ok(ExitCode::Success)
}

fn print_text(highlights: &[Highlight], status: &StoreStatus) -> std::io::Result<()> {
    let mut out = StandardStream::stdout(resolve_color());

    if highlights.is_empty() {
        writeln!(out, "no highlights")?;
    }
    for h in highlights {
        out.set_color(&scheme::swatch(&h.color))?;
        write!(out, "  ")?;
        out.reset()?;
        write!(out, " ")?;
        out.set_color(&scheme::id())?;
        write!(out, "{}", h.id)?;
        out.reset()?;
        write!(out, "  {}", preview(&h.text))?;
        out.set_color(&scheme::stamp())?;
        writeln!(out, "  {}", h.created_at.format("%Y-%m-%d %H:%M"))?;
        out.reset()?;
    }

    if status.exists {
        let updated = status
            .last_updated
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(
            out,
            "store: {} ({}, updated {})",
            status.path.display(),
            human_size(status.size),
            updated
        )?;
    } else {
        writeln!(out, "store: {} (not created yet)", status.path.display())?;
    }

    Ok(())
}

/// Truncate highlight text for one-line display.
fn preview(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX - 1).collect();
    format!("{cut}…")
}
