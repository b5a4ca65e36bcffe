//! # Financial Indicators
//!
//! The output of [`compute`](crate::compute). Built once per call and never
//! mutated; a new parameter set means a new `FinancialIndicators`.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FinancialIndicators                                │
//! │                                                                         │
//! │  services[]          revenue · cost · margin per service                │
//! │                                                                         │
//! │  gross_revenue ─┐                                                       │
//! │  variable_cost ─┼─► total_cost ─► gross_profit ─► tax ─► net_profit     │
//! │  fixed_cost ────┘                                  │         │          │
//! │                                       post_tax_deduction      ▼          │
//! │                                                   net_profit_per_partner│
//! │                                                                         │
//! │  per_pitch_investment × pitches + shared_investment = total_investment  │
//! │                                                                         │
//! │  contribution_margin_percent · break_even · ROI · payback              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::types::ServiceKind;

// =============================================================================
// Sentinels
// =============================================================================

/// Break-even revenue, or the reason there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// Gross revenue at which gross profit is zero.
    ///
    /// Zero when the venue has no revenue at all.
    Revenue(Money),

    /// Every sale costs at least as much as it brings in
    /// (contribution margin ≤ 0), so no revenue level covers fixed costs.
    Unbounded,
}

impl BreakEven {
    /// Returns the break-even revenue, if it exists.
    pub fn revenue(&self) -> Option<Money> {
        match self {
            BreakEven::Revenue(amount) => Some(*amount),
            BreakEven::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, BreakEven::Unbounded)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Revenue(amount) => write!(f, "{}", amount),
            BreakEven::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Months of net profit needed to recover the investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    Months(f64),

    /// No investment, or no positive net profit to pay it back with.
    NotApplicable,
}

impl Payback {
    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(months) => Some(*months),
            Payback::NotApplicable => None,
        }
    }
}

/// `10.9 months` or `n/a`.
impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Months(months) => write!(f, "{:.1} months", months),
            Payback::NotApplicable => write!(f, "n/a"),
        }
    }
}

// =============================================================================
// Service Breakdown
// =============================================================================

/// Monthly figures for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBreakdown {
    pub kind: ServiceKind,
    pub scales_with_pitch_count: bool,
    pub revenue: Money,
    pub cost: Money,
    /// `revenue - cost`
    pub margin: Money,
}

// =============================================================================
// Financial Indicators
// =============================================================================

/// Monthly profitability figures derived from one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialIndicators {
    /// Pitch count the figures were computed for.
    pub pitch_count: u32,
    /// Partner count used for the split.
    pub partner_count: u32,

    /// Same order as `BusinessParameters::services`.
    pub services: Vec<ServiceBreakdown>,

    pub gross_revenue: Money,
    pub variable_cost: Money,
    pub fixed_cost: Money,
    pub total_cost: Money,
    /// Before tax. Negative for a loss-making month.
    pub gross_profit: Money,
    /// Zero unless `gross_profit` is positive.
    pub tax: Money,
    /// Improvement charge withheld after tax. Zero unless configured.
    pub post_tax_deduction: Money,
    pub net_profit: Money,
    pub net_profit_per_partner: Money,

    /// Sum of per-pitch items for a single pitch.
    pub per_pitch_investment: Money,
    pub shared_investment: Money,
    /// `per_pitch_investment × pitch_count + shared_investment`
    pub total_investment: Money,

    /// `(1 - variable_cost / gross_revenue) × 100`, zero without revenue.
    pub contribution_margin_percent: f64,
    pub break_even: BreakEven,
    pub roi_monthly_percent: f64,
    pub roi_annual_percent: f64,
    pub payback: Payback,
}

impl FinancialIndicators {
    /// True when the month ends with a positive net profit.
    pub fn is_profitable(&self) -> bool {
        self.net_profit.is_positive()
    }

    /// Looks up the breakdown for one service.
    pub fn service(&self, kind: ServiceKind) -> Option<&ServiceBreakdown> {
        self.services.iter().find(|s| s.kind == kind)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
