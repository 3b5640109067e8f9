// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Add and remove command implementations.

use limn::cli::{AddArgs, Cli, RemoveArgs};
use limn::color;
use limn::error::{Error, ExitCode};

use crate::context;

/// Run the add command. Prints the new highlight's id on success.
pub fn add(cli: &Cli, args: &AddArgs) -> anyhow::Result<ExitCode> {
    let config = context::load_config(cli)?;
    let store = context::open_store(cli, &config);

    let input = args.color.as_deref().unwrap_or_else(|| config.default_color());
    let color = color::resolve_token(input).ok_or_else(|| Error::Argument(format!(
        "unrecognized color `{input}` (use a palette name: yellow, green, pink, blue, orange; or #rrggbb)"
    )))?;

    let mut highlights = store.load();
    let highlight = store
        .add(&args.text, &color, &mut highlights)
        .map_err(Error::from)?;

    println!("{}", highlight.id);
    Ok(ExitCode::Success)
}

/// Run the remove command. An unknown id exits with `NotFound`.
pub fn remove(cli: &Cli, args: &RemoveArgs) -> anyhow::Result<ExitCode> {
    let config = context::load_config(cli)?;
    let store = context::open_store(cli, &config);

    let mut highlights = store.load();
    if store
        .remove(args.id, &mut highlights)
        .map_err(Error::from)?
    {
        println!("removed {}", args.id);
        Ok(ExitCode::Success)
    } else {
        eprintln!("limn: no highlight with id {}", args.id);
        Ok(ExitCode::NotFound)
    }
}
