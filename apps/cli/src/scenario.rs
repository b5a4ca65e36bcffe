//! # Scenario Files
//!
//! A scenario is one venue's [`BusinessParameters`] stored as TOML, with an
//! optional display name.
//!
//! ## File Format
//! ```toml
//! name = "Two-pitch venue, Casablanca"
//!
//! [parameters]
//! operating_days_per_month = 26
//! pitch_count = 2
//! tax_rate_percent = 20.0
//! partner_count = 2
//!
//! [[parameters.services]]
//! kind = "hourly_rental"
//! price_cents = 30000
//! cost_cents = 4000
//! daily_volume = 8.0
//! # scales_with_pitch_count = true   (optional, per-kind default)
//!
//! [[parameters.monthly_fixed_charges]]
//! charge = "rent"
//! amount_cents = 1500000
//!
//! [[parameters.investment_items]]
//! item = "synthetic_turf"
//! amount_cents = 18000000
//! # allocation = "per_pitch"          (optional, per-item default)
//! ```
//!
//! Amounts are integer cents so a file never carries a rounding error.

use std::path::Path;

use pitchside_core::{
    BusinessParameters, FixedCharge, FixedChargeLine, InvestmentItem, InvestmentLine, Money,
    ServiceKind, ServiceLine,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// A named parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub parameters: BusinessParameters,
}

impl Scenario {
    pub fn new(name: impl Into<String>, parameters: BusinessParameters) -> Self {
        Scenario {
            name: Some(name.into()),
            parameters,
        }
    }

    /// Reads and parses a scenario file.
    ///
    /// Parameters are not validated here; the engine does that on compute.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let scenario = Self::from_toml_str(&contents).map_err(|source| {
            CliError::ScenarioParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!(
            path = %path.display(),
            services = scenario.parameters.services.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml_string(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the scenario to `path`.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    pub fn save(&self, path: &Path, overwrite: bool) -> CliResult<()> {
        if path.exists() && !overwrite {
            return Err(CliError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Label used in report headings.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed scenario")
    }

    /// A realistic two-pitch five-a-side venue, used by `pitchside init`.
    ///
    /// Every service kind, the four charges every venue pays (rent, payroll,
    /// electricity, water) plus a few common extras, and a full fit-out.
    pub fn sample() -> Self {
        let services = vec![
            ServiceLine::new(
                ServiceKind::HourlyRental,
                Money::from_major(300),
                Money::from_major(40),
                8.0,
            ),
            ServiceLine::new(
                ServiceKind::Subscription,
                Money::from_major(250),
                Money::from_major(30),
                2.0,
            ),
            ServiceLine::new(
                ServiceKind::Tournament,
                Money::from_major(1_500),
                Money::from_major(400),
                0.25,
            ),
            ServiceLine::new(
                ServiceKind::Academy,
                Money::from_major(100),
                Money::from_major(20),
                6.0,
            ),
            ServiceLine::new(
                ServiceKind::EquipmentRental,
                Money::from_major(20),
                Money::from_major(5),
                4.0,
            ),
            ServiceLine::new(
                ServiceKind::Drinks,
                Money::from_major(10),
                Money::from_major(4),
                60.0,
            ),
            ServiceLine::new(
                ServiceKind::Snacks,
                Money::from_major(8),
                Money::from_major(3),
                40.0,
            ),
        ];

        let monthly_fixed_charges = vec![
            FixedChargeLine::new(FixedCharge::Rent, Money::from_major(15_000)),
            FixedChargeLine::new(FixedCharge::Payroll, Money::from_major(12_000)),
            FixedChargeLine::new(FixedCharge::Electricity, Money::from_major(3_000)),
            FixedChargeLine::new(FixedCharge::Water, Money::from_major(800)),
            FixedChargeLine::new(FixedCharge::Maintenance, Money::from_major(1_500)),
            FixedChargeLine::new(FixedCharge::Insurance, Money::from_major(600)),
            FixedChargeLine::new(FixedCharge::Marketing, Money::from_major(1_000)),
        ];

        let investment_items = vec![
            InvestmentLine::new(InvestmentItem::SyntheticTurf, Money::from_major(180_000)),
            InvestmentLine::new(InvestmentItem::Lighting, Money::from_major(40_000)),
            InvestmentLine::new(InvestmentItem::Fencing, Money::from_major(25_000)),
            InvestmentLine::new(InvestmentItem::GoalsAndNets, Money::from_major(8_000)),
            InvestmentLine::new(InvestmentItem::ChangingRooms, Money::from_major(60_000)),
            InvestmentLine::new(InvestmentItem::Construction, Money::from_major(120_000)),
            InvestmentLine::new(InvestmentItem::Furniture, Money::from_major(15_000)),
            InvestmentLine::new(InvestmentItem::SportsEquipment, Money::from_major(10_000)),
            InvestmentLine::new(InvestmentItem::Licensing, Money::from_major(5_000)),
        ];

        Scenario::new(
            "Sample two-pitch venue",
            BusinessParameters {
                services,
                operating_days_per_month: 26,
                pitch_count: 2,
                tax_rate_percent: 20.0,
                partner_count: 2,
                monthly_fixed_charges,
                investment_items,
                post_tax_deduction_percent: 0.0,
            },
        )
    }
}
