//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing seven services and nine charges in f64:                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ drifts into the totals           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices, costs, charges and investments are whole cents.              │
//! │    Only three places touch floats:                                      │
//! │      • scale()          - daily volume × days is a real number          │
//! │      • percentage_of()  - tax and improvement rates are real numbers    │
//! │      • ratios           - margin %, ROI %, payback months               │
//! │    Each rounds back to cents (or stays a ratio) immediately.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Every operation that can leave the i64 range is `checked_*` and returns
//! `None` instead of wrapping or saturating. The engine turns that `None`
//! into [`CoreError::Overflow`](crate::CoreError::Overflow).
//!
//! ## Usage
//! ```rust
//! use pitchside_core::money::Money;
//!
//! let price = Money::from_major(200);              // 200.00 per slot
//! let monthly = price.scale(8.0 * 26.0).unwrap();  // 8 slots/day, 26 days
//! assert_eq!(monthly, Money::from_major(41_600));
//!
//! let share = monthly.split(3).unwrap();           // nearest cent
//! assert_eq!(share.cents(), 1_386_667);
//!
//! assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest f64 at or above `i64::MAX + 1`. Rounded cents must stay below it.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit, margin and break-even can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serialized as a bare integer of cents
/// - **No operator traits**: all arithmetic is checked
///
/// ## Where Money Flows
/// ```text
/// ServiceLine.price ──► scale(volume × days) ──► × pitches ──► revenue
///                                                               │
/// FixedChargeLine.amount ──► Σ ──► fixed_cost ──┐               ▼
///                                               └──► gross_profit ──► tax
///                                                                      │
/// InvestmentLine.amount ──► Σ ──► total_investment ◄── payback ◄── net_profit
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pitchside_core::money::Money;
    ///
    /// let rent = Money::from_cents(1_750_000); // 17,500.00
    /// assert_eq!(rent.major(), 17_500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Rounds a real number of cents to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and anything outside the i64
    /// range, where an `as` cast would silently saturate.
    pub fn from_rounded_cents(cents: f64) -> Option<Money> {
        if !cents.is_finite() {
            return None;
        }
        let rounded = cents.round();
        if rounded < -I64_BOUND || rounded >= I64_BOUND {
            return None;
        }
        Some(Money(rounded as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in major units as a float, for ratios only.
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiplies by a count (pitches, partners), `None` on overflow.
    #[inline]
    pub fn checked_mul(self, count: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(count)).map(Money)
    }

    /// Sums a sequence of amounts, `None` as soon as the total overflows.
    ///
    /// An empty sequence sums to zero.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Returns `pct` percent of this amount, rounded half away from zero.
    ///
    /// `pct` is used as given: 20.001 and 20.004 produce different shares.
    /// The result never exceeds the amount itself in magnitude, and the sign
    /// of the amount is kept. Negative or NaN percentages yield zero.
    ///
    /// ## Example
    /// ```rust
    /// use pitchside_core::money::Money;
    ///
    /// let profit = Money::from_major(13_700);
    /// assert_eq!(profit.percentage_of(20.0), Money::from_major(2_740));
    /// ```
    pub fn percentage_of(&self, pct: f64) -> Money {
        let magnitude = self.0.unsigned_abs();
        // Float to int casts saturate: NaN and negatives become 0
        let share = ((magnitude as f64) * pct / 100.0).round() as u64;
        let share = i128::from(share.min(magnitude));
        let signed = if self.0 < 0 { -share } else { share };
        // |signed| <= |self.0|, so it fits
        Money(signed as i64)
    }

    /// Multiplies by a real factor and rounds to the nearest cent.
    ///
    /// This is the single entry point for non-integer quantities
    /// (daily order volume × operating days). `f64::round` rounds half away
    /// from zero. Returns `None` when the product leaves the i64 range.
    pub fn scale(&self, factor: f64) -> Option<Money> {
        Money::from_rounded_cents(self.0 as f64 * factor)
    }

    /// Splits the amount into `parts` equal shares, rounded to the nearest cent.
    ///
    /// Returns `None` when `parts` is zero.
    ///
    /// ## Precision
    /// `share × parts` can differ from the original by up to `parts / 2`
    /// cents. This is the documented cost of integer money.
    pub fn split(&self, parts: u32) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        let parts = i64::from(parts);
        let quotient = self.0 / parts;
        let remainder = self.0 % parts;
        let adjust = if remainder.abs() * 2 >= parts {
            remainder.signum()
        } else {
            0
        };
        Some(Money(quotient + adjust))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `1234.50` / `-12.05`; currency symbols and grouping are the
/// presenter's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
