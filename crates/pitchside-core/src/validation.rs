//! # Validation Module
//!
//! Parameter validation for the indicator engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Scenario file / form (pitchside-cli)                         │
//! │  ├── Type checks (deserialization: u32 counts, enum keys)              │
//! │  └── Immediate feedback                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Ranges (days 1..=31, percentages 0..=100)                         │
//! │  ├── Non-negative money and volumes                                    │
//! │  ├── Counts that are used as divisors (pitches, partners) ≥ 1          │
//! │  └── Duplicate services / charges / investment items                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Engine: runs only on parameters that passed Layer 2                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pitchside_core::validation::{validate_parameters, validate_percentage};
//! use pitchside_core::BusinessParameters;
//!
//! assert!(validate_parameters(&BusinessParameters::default()).is_ok());
//! assert!(validate_percentage("tax_rate_percent", 120.0).is_err());
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::BusinessParameters;
use crate::{MAX_OPERATING_DAYS, MAX_SWEEP_PITCHES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Aggregate Validator
// =============================================================================

/// Validates a complete parameter set.
///
/// Checks run in field order and stop at the first failure, so the caller
/// always gets the earliest offending field.
pub fn validate_parameters(params: &BusinessParameters) -> ValidationResult<()> {
    validate_operating_days(params.operating_days_per_month)?;
    validate_count("pitch_count", params.pitch_count)?;
    validate_count("partner_count", params.partner_count)?;
    validate_percentage("tax_rate_percent", params.tax_rate_percent)?;
    validate_percentage(
        "post_tax_deduction_percent",
        params.post_tax_deduction_percent,
    )?;

    validate_unique("services", params.services.iter().map(|s| s.kind), |k| {
        k.as_str()
    })?;
    for line in &params.services {
        let key = line.kind.as_str();
        validate_amount(&format!("services[{key}].price_cents"), line.price)?;
        validate_amount(&format!("services[{key}].cost_cents"), line.cost)?;
        validate_volume(&format!("services[{key}].daily_volume"), line.daily_volume)?;
    }

    validate_unique(
        "monthly_fixed_charges",
        params.monthly_fixed_charges.iter().map(|c| c.charge),
        |c| c.as_str(),
    )?;
    for line in &params.monthly_fixed_charges {
        validate_amount(
            &format!("monthly_fixed_charges[{}]", line.charge.as_str()),
            line.amount,
        )?;
    }

    validate_unique(
        "investment_items",
        params.investment_items.iter().map(|i| i.item),
        |i| i.as_str(),
    )?;
    for line in &params.investment_items {
        validate_amount(
            &format!("investment_items[{}]", line.item.as_str()),
            line.amount,
        )?;
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a count that is later used as a multiplier or divisor.
///
/// ## Rules
/// - Must be at least 1
///
/// ## User Workflow
/// ```text
/// Operator sets partners: 0
///      │
///      ▼
/// validate_count("partner_count", 0) ← THIS FUNCTION
///      │
///      └── Error: "partner_count must be positive"
///          (net_profit / 0 never happens)
/// ```
pub fn validate_count(field: &str, count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the number of operating days in a month (1..=31).
pub fn validate_operating_days(days: u32) -> ValidationResult<()> {
    if days == 0 || days > MAX_OPERATING_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "operating_days_per_month".to_string(),
            min: 1,
            max: MAX_OPERATING_DAYS as i64,
        });
    }

    Ok(())
}

/// Validates a percentage (0..=100).
///
/// ## Example
/// ```rust
/// use pitchside_core::validation::validate_percentage;
///
/// assert!(validate_percentage("tax_rate_percent", 0.0).is_ok());
/// assert!(validate_percentage("tax_rate_percent", 100.0).is_ok());
/// assert!(validate_percentage("tax_rate_percent", -1.0).is_err());
/// assert!(validate_percentage("tax_rate_percent", f64::NAN).is_err());
/// ```
pub fn validate_percentage(field: &str, pct: f64) -> ValidationResult<()> {
    validate_finite(field, pct)?;

    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a money amount (price, cost, charge, investment).
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (a free service, an unused charge)
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a daily order volume: finite and non-negative.
pub fn validate_volume(field: &str, volume: f64) -> ValidationResult<()> {
    validate_finite(field, volume)?;

    if volume < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the size of a pitch-count sweep (1..=MAX_SWEEP_PITCHES).
pub fn validate_sweep_size(max_pitches: u32) -> ValidationResult<()> {
    if max_pitches == 0 || max_pitches > MAX_SWEEP_PITCHES {
        return Err(ValidationError::OutOfRange {
            field: "max_pitches".to_string(),
            min: 1,
            max: MAX_SWEEP_PITCHES as i64,
        });
    }

    Ok(())
}

fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

fn validate_unique<K, I, F>(field: &str, keys: I, name: F) -> ValidationResult<()>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
    F: Fn(&K) -> &'static str,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: name(&key).to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
