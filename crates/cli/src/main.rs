// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Limn CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use limn::cli::{Cli, Command};
use limn::error::ExitCode;

mod cmd_apply;
mod cmd_list;
mod cmd_store;
mod cmd_strip;
mod context;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LIMN_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("limn: {}", e);
            match e.downcast_ref::<limn::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Apply(args)) => cmd_apply::run(&cli, args),
        Some(Command::Add(args)) => cmd_store::add(&cli, args),
        Some(Command::Remove(args)) => cmd_store::remove(&cli, args),
        Some(Command::List(args)) => cmd_list::run(&cli, args),
        Some(Command::Strip(args)) => cmd_strip::run(args),
        Some(Command::Completions(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "limn", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
