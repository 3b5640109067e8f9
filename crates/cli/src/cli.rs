// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Highlight store and markdown-aware highlight injection
#[derive(Parser)]
#[command(name = "limn")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "LIMN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use specific store file
    #[arg(long = "store", global = true, env = "LIMN_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inject stored highlights into a markdown document
    Apply(ApplyArgs),
    /// Add a highlight to the store
    Add(AddArgs),
    /// Remove a highlight by id
    Remove(RemoveArgs),
    /// List stored highlights
    List(ListArgs),
    /// Remove injected markers from a document
    Strip(StripArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ApplyArgs {
    /// Markdown file to annotate (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write annotated document to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format: text writes the document plus a stderr summary,
    /// json wraps document and per-highlight report in one object
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress the per-highlight summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args)]
pub struct AddArgs {
    /// Text to highlight
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Highlight color: palette name (yellow, green, pink, blue, orange)
    /// or a literal #rrggbb value
    #[arg(short, long, value_name = "COLOR")]
    pub color: Option<String>,
}

#[derive(clap::Args)]
pub struct RemoveArgs {
    /// Id of the highlight to remove
    #[arg(value_name = "ID")]
    pub id: uuid::Uuid,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(clap::Args)]
pub struct StripArgs {
    /// Annotated file to strip (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write stripped document to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: clap_complete::Shell,
}

/// Output format for apply/list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
