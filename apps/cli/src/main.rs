//! # Pitchside
//!
//! ```text
//! pitchside init venue.toml
//! pitchside compute --scenario venue.toml [--pitches N] [--partners N] [--tax-rate P]
//! pitchside sweep --scenario venue.toml [--max-pitches N] [--format json]
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use pitchside_cli::cli::Cli;
use pitchside_cli::{commands, init_tracing, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.clone()).context("Failed to load configuration")?;
    init_tracing(&config.log_filter);
    config.warn_rejected_overrides();
    debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &mut out)?;

    Ok(())
}
