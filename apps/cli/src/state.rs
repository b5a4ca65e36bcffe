//! # Session State
//!
//! Holds the caller-owned parameters together with the indicators last
//! computed from them.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Caller Action             Method                 State Change          │
//! │  ─────────────             ──────                 ────────────          │
//! │                                                                         │
//! │  Load scenario ──────────► SessionState::new ───► params + indicators   │
//! │                                                                         │
//! │  Edit parameters ────────► commit(params) ──────► compute() once        │
//! │                                 │                  ├─ Ok:  replace both │
//! │                                 │                  └─ Err: keep both    │
//! │                                                                         │
//! │  --pitches / --partners ─► apply(overrides) ────► commit(edited copy)   │
//! │                                                                         │
//! │  Show results ───────────► indicators() ────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine runs exactly once per committed change and never while the
//! indicators are only being read. A rejected commit leaves the previous
//! parameters and indicators in place.
//!
//! The CLI is single-threaded, so the state is a plain owned value rather
//! than something behind a lock.

use pitchside_core::{
    compute, sweep_by_pitch_count, BusinessParameters, CoreResult, FinancialIndicators,
    PitchSweep,
};
use tracing::debug;

/// Command-line overrides applied on top of a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterOverrides {
    pub pitch_count: Option<u32>,
    pub partner_count: Option<u32>,
    pub tax_rate_percent: Option<f64>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        self.pitch_count.is_none() && self.partner_count.is_none() && self.tax_rate_percent.is_none()
    }

    /// Returns a copy of `params` with every set override applied.
    pub fn apply_to(&self, params: &BusinessParameters) -> BusinessParameters {
        let mut edited = params.clone();
        if let Some(pitch_count) = self.pitch_count {
            edited.pitch_count = pitch_count;
        }
        if let Some(partner_count) = self.partner_count {
            edited.partner_count = partner_count;
        }
        if let Some(tax_rate_percent) = self.tax_rate_percent {
            edited.tax_rate_percent = tax_rate_percent;
        }
        edited
    }
}

/// Parameters plus the indicators derived from them.
#[derive(Debug, Clone)]
pub struct SessionState {
    params: BusinessParameters,
    indicators: FinancialIndicators,
    /// Number of successful commits since creation.
    revision: u64,
}

impl SessionState {
    /// Validates and computes the initial parameter set.
    pub fn new(params: BusinessParameters) -> CoreResult<Self> {
        let indicators = compute(&params)?;
        Ok(SessionState {
            params,
            indicators,
            revision: 0,
        })
    }

    pub fn params(&self) -> &BusinessParameters {
        &self.params
    }

    pub fn indicators(&self) -> &FinancialIndicators {
        &self.indicators
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the parameters, recomputing once.
    ///
    /// On error nothing changes.
    pub fn commit(&mut self, params: BusinessParameters) -> CoreResult<&FinancialIndicators> {
        let indicators = compute(&params)?;
        self.params = params;
        self.indicators = indicators;
        self.revision += 1;

        debug!(revision = self.revision, "parameters committed");
        Ok(&self.indicators)
    }

    /// Commits the current parameters with `overrides` applied.
    ///
    /// Empty overrides are a no-op and do not recompute.
    pub fn apply(&mut self, overrides: &ParameterOverrides) -> CoreResult<&FinancialIndicators> {
        if overrides.is_empty() {
            return Ok(&self.indicators);
        }
        let edited = overrides.apply_to(&self.params);
        self.commit(edited)
    }

    /// Compares 1..=`max_pitches` pitches with the current parameters.
    pub fn sweep(&self, max_pitches: u32) -> CoreResult<PitchSweep> {
        sweep_by_pitch_count(&self.params, max_pitches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_core::{CoreError, Money, ServiceKind, ServiceLine};

    fn params() -> BusinessParameters {
        BusinessParameters {
            services: vec![ServiceLine::new(
                ServiceKind::HourlyRental,
                Money::from_major(200),
                Money::from_major(50),
                10.0,
            )],
            ..BusinessParameters::default()
        }
    }

    #[test]
    fn test_new_computes_once() {
        let state = SessionState::new(params()).unwrap();
        assert_eq!(state.revision(), 0);
        // 10 × 26 × 200
        assert_eq!(state.indicators().gross_revenue, Money::from_major(52_000));
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        let mut bad = params();
        bad.partner_count = 0;
        assert!(matches!(
            SessionState::new(bad),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_commit_replaces_both() {
        let mut state = SessionState::new(params()).unwrap();
        let mut edited = params();
        edited.pitch_count = 2;

        let revenue = state.commit(edited).unwrap().gross_revenue;
        assert_eq!(revenue, Money::from_major(104_000));
        assert_eq!(state.params().pitch_count, 2);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn test_rejected_commit_keeps_previous_state() {
        let mut state = SessionState::new(params()).unwrap();
        let before = state.indicators().clone();

        let mut bad = params();
        bad.operating_days_per_month = 40;
        assert!(state.commit(bad).is_err());

        assert_eq!(state.indicators(), &before);
        assert_eq!(state.params().operating_days_per_month, 26);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_apply_overrides() {
        let mut state = SessionState::new(params()).unwrap();
        let overrides = ParameterOverrides {
            pitch_count: Some(3),
            partner_count: Some(2),
            tax_rate_percent: Some(10.0),
        };

        let indicators = state.apply(&overrides).unwrap();
        assert_eq!(indicators.pitch_count, 3);
        assert_eq!(indicators.partner_count, 2);
        assert_eq!(state.params().tax_rate_percent, 10.0);
    }

    #[test]
    fn test_empty_overrides_do_not_recompute() {
        let mut state = SessionState::new(params()).unwrap();
        state.apply(&ParameterOverrides::default()).unwrap();
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut state = SessionState::new(params()).unwrap();
        let overrides = ParameterOverrides {
            tax_rate_percent: Some(120.0),
            ..ParameterOverrides::default()
        };
        assert!(state.apply(&overrides).is_err());
        assert_eq!(state.params().tax_rate_percent, 0.0);
    }

    #[test]
    fn test_sweep_uses_current_parameters() {
        let mut state = SessionState::new(params()).unwrap();
        let mut edited = params();
        edited.operating_days_per_month = 20;
        state.commit(edited).unwrap();

        let sweep = state.sweep(3).unwrap();
        // 10 × 20 × 200 per pitch
        assert_eq!(
            sweep.get(1).unwrap().indicators.gross_revenue,
            Money::from_major(40_000)
        );
        assert_eq!(sweep.len(), 3);
    }
}
