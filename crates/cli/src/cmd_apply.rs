// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Apply command implementation.

use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use limn::cli::{ApplyArgs, Cli, OutputFormat};
use limn::error::{Error, ExitCode};
use limn::inject::{HighlightOutcome, Injector};

use crate::context;

/// JSON payload for `apply --format json`: the annotated document plus the
/// per-highlight report in one object.
#[derive(Serialize)]
struct JsonOutput<'a> {
    document: &'a str,
    highlights: &'a [HighlightOutcome],
}

/// Run the apply command.
pub fn run(cli: &Cli, args: &ApplyArgs) -> anyhow::Result<ExitCode> {
    let config = context::load_config(cli)?;
    let store = context::open_store(cli, &config);

    let highlights = store.load();
    let document = read_input(args.file.as_deref())?;
    let outcome = Injector::new().apply(&document, &highlights);

    match args.format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&JsonOutput {
                document: &outcome.document,
                highlights: &outcome.report.outcomes,
            })
            .map_err(|e| Error::Internal(e.to_string()))?;
            write_output(args.output.as_deref(), &payload, true)?;
        }
        OutputFormat::Text => {
            write_output(args.output.as_deref(), &outcome.document, false)?;
            if !args.quiet {
                print_summary(highlights.len(), &outcome.report);
            }
        }
    }

    Ok(ExitCode::Success)
}

/// One-line stderr summary of what the pass did.
fn print_summary(total: usize, report: &limn::ApplyReport) {
    if total == 0 {
        eprintln!("limn: store is empty; document unchanged");
        return;
    }

    let mut parts = vec![format!("{} highlighted", report.marked())];
    if report.unmatched() > 0 {
        parts.push(format!("{} without a match", report.unmatched()));
    }
    if report.skipped() > 0 {
        parts.push(format!("{} skipped", report.skipped()));
    }
    eprintln!("limn: {}", parts.join(", "));
}

/// Read the document from a file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String, Error> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::Internal(format!("failed to read stdin: {e}")))?;
            Ok(buf)
        }
    }
}

/// Write the result to a file, or stdout when no path is given.
///
/// The document is emitted byte-for-byte; only JSON payloads get a
/// trailing newline.
pub fn write_output(output: Option<&Path>, content: &str, newline: bool) -> Result<(), Error> {
    match output {
        Some(path) => {
            let data = if newline {
                format!("{content}\n")
            } else {
                content.to_string()
            };
            std::fs::write(path, data).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            let result = if newline {
                writeln!(lock, "{content}")
            } else {
                write!(lock, "{content}")
            };
            result.map_err(|e| Error::Internal(format!("failed to write stdout: {e}")))
        }
    }
}
