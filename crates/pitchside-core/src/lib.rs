//! # pitchside-core: Pure Profitability Logic for Pitchside
//!
//! This crate is the **heart** of Pitchside. It turns the operating
//! parameters of a mini-football pitch business into financial indicators,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pitchside Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pitchside-cli (apps/cli)                     │   │
//! │  │   scenario.toml ──► SessionState ──► report (table / JSON)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &BusinessParameters                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pitchside-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  engine   │  │   sweep   │  │   │
//! │  │   │ Services  │  │   Money   │  │  compute  │  │ 1..=N     │  │   │
//! │  │   │ Charges   │  │  checked  │  │           │  │ pitches   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input types (services, charges, investment items, parameters)
//! - [`money`] - Money type with checked integer arithmetic
//! - [`indicators`] - Output types (`FinancialIndicators`, break-even, payback)
//! - [`engine`] - The indicator computation
//! - [`sweep`] - "What if we had N pitches" comparison
//! - [`validation`] - Parameter validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same parameters = same indicators, on any thread
//! 2. **Caller-Owned Input**: parameters are passed in on every call, never stored
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Unprofitable Is Not An Error**: losses, zero ROI and "no payback" are results
//!
//! ## Example Usage
//!
//! ```rust
//! use pitchside_core::{
//!     compute, BusinessParameters, FixedCharge, FixedChargeLine, Money, ServiceKind,
//!     ServiceLine,
//! };
//!
//! let params = BusinessParameters {
//!     services: vec![ServiceLine::new(
//!         ServiceKind::HourlyRental,
//!         Money::from_major(200),
//!         Money::from_major(50),
//!         8.0,
//!     )],
//!     operating_days_per_month: 26,
//!     pitch_count: 1,
//!     tax_rate_percent: 20.0,
//!     partner_count: 2,
//!     monthly_fixed_charges: vec![FixedChargeLine::new(
//!         FixedCharge::Rent,
//!         Money::from_major(17_500),
//!     )],
//!     ..BusinessParameters::default()
//! };
//!
//! let indicators = compute(&params).unwrap();
//! assert_eq!(indicators.net_profit, Money::from_major(10_960));
//! assert_eq!(indicators.net_profit_per_partner, Money::from_major(5_480));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod indicators;
pub mod money;
pub mod sweep;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::compute;
pub use error::{CoreError, CoreResult, ValidationError};
pub use indicators::{BreakEven, FinancialIndicators, Payback, ServiceBreakdown};
pub use money::Money;
pub use sweep::{sweep_by_pitch_count, PitchSweep, SweepEntry};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for `operating_days_per_month`.
pub const MAX_OPERATING_DAYS: u32 = 31;

/// Number of pitch counts compared when the caller does not say otherwise.
pub const DEFAULT_SWEEP_PITCHES: u32 = 5;

/// Largest sweep accepted by [`sweep_by_pitch_count`].
///
/// ## Business Reason
/// A single venue with more than a few dozen pitches is a different business.
/// The cap also keeps a typo (500 instead of 5) from producing a useless table.
pub const MAX_SWEEP_PITCHES: u32 = 50;

/// Months used to annualize the monthly ROI.
pub const MONTHS_PER_YEAR: u32 = 12;
