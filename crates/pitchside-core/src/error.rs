//! # Error Types
//!
//! Domain-specific error types for pitchside-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pitchside-core errors (this file)                                     │
//! │  ├── CoreError        - Computation faults (zero divisor, overflow)    │
//! │  └── ValidationError  - Invalid parameters (rejected up front)         │
//! │                                                                         │
//! │  pitchside-cli errors (separate crate)                                 │
//! │  └── CliError         - Config, scenario file, I/O failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! A loss-making scenario, a zero ROI, a payback that never happens and a
//! break-even that cannot be reached are all valid results. They live in
//! [`FinancialIndicators`](crate::FinancialIndicators), never here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the indicator engine and the sweep.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Parameters were rejected before any computation ran.
    #[error("Invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    /// A structurally invalid zero denominator reached the arithmetic.
    ///
    /// ## When This Occurs
    /// Never, if validation passed. The engine still checks instead of
    /// letting an integer division panic.
    #[error("Division undefined while computing {quantity}")]
    DivisionUndefined { quantity: &'static str },

    /// An amount left the representable range of [`Money`](crate::Money).
    ///
    /// ## When This Occurs
    /// Validation bounds signs and ranges, not magnitudes. Absurd inputs
    /// (billions of pitches, a daily volume of 1e300) end up here.
    #[error("Amount too large while computing {quantity}")]
    Overflow { quantity: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Parameter validation failures.
///
/// `field` is a path into [`BusinessParameters`](crate::BusinessParameters),
/// e.g. `services[drinks].daily_volume`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be at least one.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Amount or volume is negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (NaN, infinity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The same service, charge or investment item appears twice.
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Returns the offending field path.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
