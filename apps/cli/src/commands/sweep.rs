//! `pitchside sweep`

use std::io::Write;

use tracing::info;

use crate::cli::SweepArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use crate::report;
use crate::scenario::Scenario;
use crate::state::SessionState;

/// Compares the scenario across 1..=N pitches.
///
/// N comes from `--max-pitches`, else `default_sweep_pitches` in the config.
pub fn run(args: &SweepArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let state = SessionState::new(scenario.parameters.clone())?;

    let max_pitches = args.max_pitches.unwrap_or(config.default_sweep_pitches);
    let sweep = state.sweep(max_pitches)?;

    if let Some(best) = sweep.best_by_net_profit() {
        info!(
            scenario = scenario.display_name(),
            max_pitches,
            best_pitch_count = best.pitch_count,
            "sweep complete"
        );
    }

    let title = scenario.display_name();
    match args.format.unwrap_or(config.output_format) {
        OutputFormat::Table => write!(out, "{}", report::render_sweep(title, &sweep, config))?,
        OutputFormat::Json => writeln!(out, "{}", report::sweep_json(title, &sweep)?)?,
    }
    Ok(())
}
