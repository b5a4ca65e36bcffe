//! # Report Rendering
//!
//! Turns indicators into terminal tables or JSON.
//!
//! ## Table Output
//! ```text
//! Sample two-pitch venue: 2 pitches, 2 partners
//! ┌──────────────────┬────────┬───────────────┬──────────────┬───────────────┐
//! │ Service          ┆ Scales ┆       Revenue ┆         Cost ┆        Margin │
//! ╞══════════════════╪════════╪═══════════════╪══════════════╪═══════════════╡
//! │ Hourly rental    ┆ yes    ┆ 124,800.00 DH ┆ 16,640.00 DH ┆ 108,160.00 DH │
//! ...
//! ┌─────────────────────┬────────────────┐
//! │ Indicator           ┆          Value │
//! ╞═════════════════════╪════════════════╡
//! │ Gross revenue       ┆ 229,580.00 DH  │
//! ...
//! ```
//!
//! ## Formatting Rules
//! - Amounts: two decimals, thousands separators, currency symbol suffix
//! - Percentages: two decimals
//! - Payback: one decimal, or `n/a`
//! - Break-even: amount, or `unbounded`
//!
//! A loss-making result is still a result: it renders normally with a
//! notice underneath.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use pitchside_core::{BreakEven, FinancialIndicators, Money, Payback, PitchSweep, SweepEntry};
use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Printed under a result whose net profit is zero or negative.
pub const UNPROFITABLE_NOTICE: &str =
    "Notice: this venue does not make a profit at these parameters.";

// =============================================================================
// Value Formatting
// =============================================================================

/// `4160000` cents with `"DH"` → `"41,600.00 DH"`.
pub fn format_money(amount: Money, symbol: &str) -> String {
    let cents = amount.cents();
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();

    let major = (abs / 100).to_string();
    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, digit) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let number = format!("{}{}.{:02}", sign, grouped, abs % 100);
    if symbol.is_empty() {
        number
    } else {
        format!("{} {}", number, symbol)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2} %", value)
}

pub fn format_break_even(break_even: &BreakEven, symbol: &str) -> String {
    match break_even {
        BreakEven::Revenue(amount) => format_money(*amount, symbol),
        BreakEven::Unbounded => "unbounded".to_string(),
    }
}

pub fn format_payback(payback: &Payback) -> String {
    payback.to_string()
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

// =============================================================================
// Single Result
// =============================================================================

/// Renders one computation as a heading, a per-service table and a
/// summary table.
pub fn render_indicators(title: &str, indicators: &FinancialIndicators, config: &CliConfig) -> String {
    let symbol = config.currency_symbol.as_str();
    let money = |amount: Money| right(format_money(amount, symbol));

    let mut services = Table::new();
    services
        .load_preset(UTF8_FULL)
        .set_header(vec!["Service", "Scales", "Revenue", "Cost", "Margin"]);
    for line in &indicators.services {
        services.add_row(vec![
            Cell::new(line.kind.label()),
            Cell::new(if line.scales_with_pitch_count { "yes" } else { "no" }),
            money(line.revenue),
            money(line.cost),
            money(line.margin),
        ]);
    }

    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_header(vec!["Indicator", "Value"]);

    let mut rows: Vec<(&str, Cell)> = vec![
        ("Gross revenue", money(indicators.gross_revenue)),
        ("Variable cost", money(indicators.variable_cost)),
        ("Fixed cost", money(indicators.fixed_cost)),
        ("Total cost", money(indicators.total_cost)),
        ("Gross profit", money(indicators.gross_profit)),
        ("Tax", money(indicators.tax)),
    ];
    if !indicators.post_tax_deduction.is_zero() {
        rows.push(("Improvement charge", money(indicators.post_tax_deduction)));
    }
    rows.extend([
        ("Net profit", money(indicators.net_profit)),
        ("Net profit per partner", money(indicators.net_profit_per_partner)),
        ("Investment per pitch", money(indicators.per_pitch_investment)),
        ("Shared investment", money(indicators.shared_investment)),
        ("Total investment", money(indicators.total_investment)),
        (
            "Contribution margin",
            right(format_percent(indicators.contribution_margin_percent)),
        ),
        (
            "Break-even revenue",
            right(format_break_even(&indicators.break_even, symbol)),
        ),
        (
            "ROI (monthly)",
            right(format_percent(indicators.roi_monthly_percent)),
        ),
        (
            "ROI (annual)",
            right(format_percent(indicators.roi_annual_percent)),
        ),
        ("Payback", right(format_payback(&indicators.payback))),
    ]);
    for (label, value) in rows {
        summary.add_row(vec![Cell::new(label), value]);
    }

    let mut out = format!(
        "{}: {}, {}\n",
        title,
        plural(indicators.pitch_count, "pitch"),
        plural(indicators.partner_count, "partner")
    );
    if !indicators.services.is_empty() {
        out.push_str(&services.to_string());
        out.push('\n');
    }
    out.push_str(&summary.to_string());
    out.push('\n');
    if !indicators.is_profitable() {
        out.push_str(UNPROFITABLE_NOTICE);
        out.push('\n');
    }
    out
}

// =============================================================================
// Sweep
// =============================================================================

/// Renders the pitch-count comparison with the best row marked.
pub fn render_sweep(title: &str, sweep: &PitchSweep, config: &CliConfig) -> String {
    let symbol = config.currency_symbol.as_str();
    let best = sweep.best_by_net_profit().map(|entry| entry.pitch_count);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Pitches",
        "Revenue",
        "Net profit",
        "Per partner",
        "Investment",
        "ROI (annual)",
        "Payback",
        "",
    ]);

    for entry in sweep {
        let ind = &entry.indicators;
        table.add_row(vec![
            right(entry.pitch_count.to_string()),
            right(format_money(ind.gross_revenue, symbol)),
            right(format_money(ind.net_profit, symbol)),
            right(format_money(ind.net_profit_per_partner, symbol)),
            right(format_money(ind.total_investment, symbol)),
            right(format_percent(ind.roi_annual_percent)),
            right(format_payback(&ind.payback)),
            Cell::new(if Some(entry.pitch_count) == best { "◄ best" } else { "" }),
        ]);
    }

    let mut out = format!("{}: 1 to {} pitches\n", title, sweep.len());
    out.push_str(&table.to_string());
    out.push('\n');

    if let Some(entry) = sweep.best_by_net_profit() {
        out.push_str(&format!(
            "Best: {} (net profit {})\n",
            plural(entry.pitch_count, "pitch"),
            format_money(entry.indicators.net_profit, symbol)
        ));
        if !entry.indicators.is_profitable() {
            out.push_str(UNPROFITABLE_NOTICE);
            out.push('\n');
        }
    }
    out
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Serialize)]
struct ComputeReport<'a> {
    scenario: &'a str,
    profitable: bool,
    indicators: &'a FinancialIndicators,
}

#[derive(Serialize)]
struct SweepReport<'a> {
    scenario: &'a str,
    best_pitch_count: Option<u32>,
    entries: &'a [SweepEntry],
}

/// Pretty JSON for one computation. Amounts stay in integer cents.
pub fn indicators_json(title: &str, indicators: &FinancialIndicators) -> CliResult<String> {
    let report = ComputeReport {
        scenario: title,
        profitable: indicators.is_profitable(),
        indicators,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn sweep_json(title: &str, sweep: &PitchSweep) -> CliResult<String> {
    let report = SweepReport {
        scenario: title,
        best_pitch_count: sweep.best_by_net_profit().map(|entry| entry.pitch_count),
        entries: sweep.entries(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_core::{
        compute, sweep_by_pitch_count, BusinessParameters, FixedCharge, FixedChargeLine,
        InvestmentItem, InvestmentLine, ServiceKind, ServiceLine,
    };

    fn params(price_major: i64) -> BusinessParameters {
        BusinessParameters {
            services: vec![ServiceLine::new(
                ServiceKind::HourlyRental,
                Money::from_major(price_major),
                Money::from_major(50),
                10.0,
            )],
            monthly_fixed_charges: vec![FixedChargeLine::new(
                FixedCharge::Rent,
                Money::from_major(20_000),
            )],
            investment_items: vec![InvestmentLine::new(
                InvestmentItem::SyntheticTurf,
                Money::from_major(100_000),
            )],
            ..BusinessParameters::default()
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Money::from_cents(4_160_000), "DH"), "41,600.00 DH");
        assert_eq!(format_money(Money::from_cents(-1_880_005), "DH"), "-18,800.05 DH");
        assert_eq!(format_money(Money::from_cents(99), "DH"), "0.99 DH");
        assert_eq!(format_money(Money::from_cents(123_456_789_00), ""), "123,456,789.00");
        assert_eq!(format_money(Money::zero(), "€"), "0.00 €");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(9.1333), "9.13 %");
        assert_eq!(format_percent(-12.5), "-12.50 %");
    }

    #[test]
    fn test_format_sentinels() {
        assert_eq!(format_break_even(&BreakEven::Unbounded, "DH"), "unbounded");
        assert_eq!(
            format_break_even(&BreakEven::Revenue(Money::from_major(1_000)), "DH"),
            "1,000.00 DH"
        );
        assert_eq!(format_payback(&Payback::NotApplicable), "n/a");
        assert_eq!(format_payback(&Payback::Months(3.26)), "3.3 months");
    }

    #[test]
    fn test_render_profitable_result() {
        let indicators = compute(&params(200)).unwrap();
        let text = render_indicators("Venue", &indicators, &CliConfig::default());

        assert!(text.starts_with("Venue: 1 pitch, 1 partner"));
        assert!(text.contains("Hourly rental"));
        assert!(text.contains("52,000.00 DH"));
        assert!(!text.contains(UNPROFITABLE_NOTICE));
        assert!(!text.contains("Improvement charge"));
    }

    #[test]
    fn test_render_loss_shows_notice_and_sentinels() {
        // Price below cost: margin is negative, break-even cannot be reached
        let indicators = compute(&params(40)).unwrap();
        let text = render_indicators("Venue", &indicators, &CliConfig::default());

        assert!(text.contains("unbounded"));
        assert!(text.contains("n/a"));
        assert!(text.contains(UNPROFITABLE_NOTICE));
    }

    #[test]
    fn test_render_uses_configured_symbol() {
        let config = CliConfig {
            currency_symbol: "MAD".to_string(),
            ..CliConfig::default()
        };
        let indicators = compute(&params(200)).unwrap();
        let text = render_indicators("Venue", &indicators, &config);
        assert!(text.contains("52,000.00 MAD"));
        assert!(!text.contains(" DH"));
    }

    #[test]
    fn test_render_sweep_marks_best() {
        let sweep = sweep_by_pitch_count(&params(200), 3).unwrap();
        let text = render_sweep("Venue", &sweep, &CliConfig::default());

        assert!(text.contains("1 to 3 pitches"));
        assert_eq!(text.matches("◄ best").count(), 1);
        assert!(text.contains("Best: 3 pitches"));
    }

    #[test]
    fn test_indicators_json() {
        let indicators = compute(&params(200)).unwrap();
        let json = indicators_json("Venue", &indicators).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["scenario"], "Venue");
        assert_eq!(value["profitable"], true);
        assert_eq!(value["indicators"]["gross_revenue"], 5_200_000);
    }

    #[test]
    fn test_sweep_json() {
        let sweep = sweep_by_pitch_count(&params(200), 2).unwrap();
        let json = sweep_json("Venue", &sweep).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["best_pitch_count"], 2);
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["pitch_count"], 1);
        assert_eq!(entries[1]["indicators"]["pitch_count"], 2);
    }
}
