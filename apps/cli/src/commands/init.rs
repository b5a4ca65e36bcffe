//! `pitchside init`

use std::io::Write;

use tracing::info;

use crate::cli::InitArgs;
use crate::error::CliResult;
use crate::scenario::Scenario;

/// Writes the sample scenario so users have a file to edit.
pub fn run(args: &InitArgs, out: &mut dyn Write) -> CliResult<()> {
    Scenario::sample().save(&args.path, args.force)?;
    info!(path = %args.path.display(), "sample scenario written");

    writeln!(out, "Wrote sample scenario to {}", args.path.display())?;
    writeln!(
        out,
        "Edit it, then run: pitchside compute --scenario {}",
        args.path.display()
    )?;
    Ok(())
}
