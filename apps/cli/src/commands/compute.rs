//! `pitchside compute`

use std::io::Write;

use tracing::info;

use crate::cli::ComputeArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use crate::report;
use crate::scenario::Scenario;
use crate::state::SessionState;

/// Loads the scenario, applies any overrides, and prints the indicators.
///
/// An override that fails validation aborts the command. A loss-making
/// result does not.
pub fn run(args: &ComputeArgs, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let mut state = SessionState::new(scenario.parameters.clone())?;
    state.apply(&args.overrides())?;

    let indicators = state.indicators();
    info!(
        scenario = scenario.display_name(),
        pitch_count = indicators.pitch_count,
        net_profit = %indicators.net_profit,
        profitable = indicators.is_profitable(),
        "computed indicators"
    );

    let title = scenario.display_name();
    match args.format.unwrap_or(config.output_format) {
        OutputFormat::Table => {
            write!(out, "{}", report::render_indicators(title, indicators, config))?
        }
        OutputFormat::Json => writeln!(out, "{}", report::indicators_json(title, indicators)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_file;
    use crate::error::CliError;
    use std::path::PathBuf;

    fn args(scenario: PathBuf) -> ComputeArgs {
        ComputeArgs {
            scenario,
            pitches: None,
            partners: None,
            tax_rate: None,
            format: None,
        }
    }

    #[test]
    fn test_compute_prints_table() {
        let path = sample_file("compute-table");
        let mut out = Vec::new();

        run(&args(path.clone()), &CliConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Sample two-pitch venue: 2 pitches, 2 partners"));
        assert!(text.contains("Net profit per partner"));
        assert!(text.contains(" DH"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_compute_json_with_overrides() {
        let path = sample_file("compute-json");
        let mut out = Vec::new();
        let args = ComputeArgs {
            pitches: Some(4),
            partners: Some(3),
            format: Some(OutputFormat::Json),
            ..args(path.clone())
        };

        run(&args, &CliConfig::default(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["indicators"]["pitch_count"], 4);
        assert_eq!(value["indicators"]["partner_count"], 3);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_compute_rejects_invalid_override() {
        let path = sample_file("compute-bad-override");
        let mut out = Vec::new();
        let args = ComputeArgs {
            partners: Some(0),
            ..args(path.clone())
        };

        let result = run(&args, &CliConfig::default(), &mut out);
        assert!(matches!(result, Err(CliError::Core(_))));
        assert!(out.is_empty());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_compute_loss_is_not_an_error() {
        let path = sample_file("compute-loss");
        let mut scenario = Scenario::load(&path).unwrap();
        for line in &mut scenario.parameters.services {
            line.daily_volume = 0.0;
        }
        scenario.save(&path, true).unwrap();

        let mut out = Vec::new();
        run(&args(path.clone()), &CliConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(report::UNPROFITABLE_NOTICE));

        std::fs::remove_file(path).unwrap();
    }
}
