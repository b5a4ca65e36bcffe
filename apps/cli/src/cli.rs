//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::state::ParameterOverrides;

/// Monthly profitability of a five-a-side football venue.
#[derive(Debug, Parser)]
#[command(name = "pitchside", author, version, long_about = None)]
pub struct Cli {
    /// Config file (default: platform config dir / pitchside.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the indicators for one scenario
    Compute(ComputeArgs),

    /// Compare the scenario across 1..=N pitches
    Sweep(SweepArgs),

    /// Write a sample scenario file to start from
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Scenario file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub scenario: PathBuf,

    /// Override the number of pitches
    #[arg(long)]
    pub pitches: Option<u32>,

    /// Override the number of partners
    #[arg(long)]
    pub partners: Option<u32>,

    /// Override the tax rate, in percent
    #[arg(long, value_name = "PERCENT")]
    pub tax_rate: Option<f64>,

    /// Output format (default from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ComputeArgs {
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            pitch_count: self.pitches,
            partner_count: self.partners,
            tax_rate_percent: self.tax_rate,
        }
    }
}

#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Scenario file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub scenario: PathBuf,

    /// Largest pitch count to compare (default from config)
    #[arg(long, value_name = "N")]
    pub max_pitches: Option<u32>,

    /// Output format (default from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the scenario
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Replace the file if it already exists
    #[arg(long)]
    pub force: bool,
}
