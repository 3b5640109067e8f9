// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Strip command implementation.

use limn::cli::StripArgs;
use limn::error::ExitCode;
use limn::inject::marker;

use crate::cmd_apply::{read_input, write_output};

/// Run the strip command: remove injected markers, keeping wrapped text.
pub fn run(args: &StripArgs) -> anyhow::Result<ExitCode> {
    let document = read_input(args.file.as_deref())?;
    let stripped = marker::strip(&document);
    write_output(args.output.as_deref(), &stripped, false)?;
    Ok(ExitCode::Success)
}
