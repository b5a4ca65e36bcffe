//! # Pitch-Count Sweep
//!
//! Answers "what if we had 1, 2, ... N pitches?" by running
//! [`compute`] once per pitch count with every other parameter held fixed.
//!
//! ## Flow
//! ```text
//! params ──► with_pitch_count(1) ──► compute ──► SweepEntry { 1, indicators }
//!        ──► with_pitch_count(2) ──► compute ──► SweepEntry { 2, indicators }
//!        ...
//!        ──► with_pitch_count(N) ──► compute ──► SweepEntry { N, indicators }
//!
//! PitchSweep::best_by_net_profit() = first entry with the highest net profit
//! ```
//!
//! Five computations over a handful of services is negligible work, so the
//! sweep runs sequentially and caches nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::engine::compute;
use crate::error::CoreResult;
use crate::indicators::FinancialIndicators;
use crate::types::BusinessParameters;
use crate::validation::validate_sweep_size;

/// Indicators for one pitch count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepEntry {
    pub pitch_count: u32,
    pub indicators: FinancialIndicators,
}

/// The full comparison, ordered by ascending pitch count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchSweep {
    entries: Vec<SweepEntry>,
}

impl PitchSweep {
    /// Entries in ascending pitch-count order. Can be iterated any number of times.
    pub fn iter(&self) -> std::slice::Iter<'_, SweepEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[SweepEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a given pitch count.
    pub fn get(&self, pitch_count: u32) -> Option<&SweepEntry> {
        self.entries.iter().find(|e| e.pitch_count == pitch_count)
    }

    /// The pitch count with the highest net profit.
    ///
    /// Ties go to the smallest pitch count: the scan keeps the first
    /// strictly greater value.
    pub fn best_by_net_profit(&self) -> Option<&SweepEntry> {
        let mut best: Option<&SweepEntry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.indicators.net_profit <= current.indicators.net_profit => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a PitchSweep {
    type Item = &'a SweepEntry;
    type IntoIter = std::slice::Iter<'a, SweepEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes indicators for every pitch count from 1 to `max_pitches`.
///
/// ## Errors
/// - `max_pitches` outside `1..=MAX_SWEEP_PITCHES`
/// - any parameter other than `pitch_count` failing validation
///
/// The caller's `pitch_count` is ignored; each step overrides it.
///
/// ## Example
/// ```rust
/// use pitchside_core::{sweep_by_pitch_count, BusinessParameters, DEFAULT_SWEEP_PITCHES};
///
/// let sweep = sweep_by_pitch_count(&BusinessParameters::default(), DEFAULT_SWEEP_PITCHES).unwrap();
/// assert_eq!(sweep.len(), 5);
///
/// // Nothing earned anywhere: every count ties, the smallest wins.
/// assert_eq!(sweep.best_by_net_profit().unwrap().pitch_count, 1);
/// ```
pub fn sweep_by_pitch_count(
    params: &BusinessParameters,
    max_pitches: u32,
) -> CoreResult<PitchSweep> {
    validate_sweep_size(max_pitches)?;

    let entries = (1..=max_pitches)
        .map(|pitch_count| {
            let indicators = compute(&params.with_pitch_count(pitch_count))?;
            trace!(pitch_count, net_profit = %indicators.net_profit, "sweep step");
            Ok(SweepEntry {
                pitch_count,
                indicators,
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    let sweep = PitchSweep { entries };
    if let Some(best) = sweep.best_by_net_profit() {
        debug!(
            max_pitches,
            best_pitch_count = best.pitch_count,
            best_net_profit = %best.indicators.net_profit,
            "pitch sweep complete"
        );
    }

    Ok(sweep)
}

// =============================================================================
// Unit Tests
// =============================================================================
