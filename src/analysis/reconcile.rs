use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::candidate::TransitCandidate;
use crate::error::{ViewerError, ViewerResult};

/// Proximity rule for merging candidates from several sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Centers closer than `proximity_ratio * max(durations)` are duplicates.
    pub proximity_ratio: f64,
    /// Duration floor; a candidate without a usable window compares by center.
    pub duration_epsilon: f64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            proximity_ratio: 0.01,
            duration_epsilon: 1e-9,
        }
    }
}

impl ReconcileConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        for (name, value) in [
            ("proximity_ratio", self.proximity_ratio),
            ("duration_epsilon", self.duration_epsilon),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "reconcile `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn are_duplicates(&self, a: &TransitCandidate, b: &TransitCandidate) -> bool {
        let duration = a
            .duration()
            .unwrap_or(0.0)
            .max(b.duration().unwrap_or(0.0))
            .max(self.duration_epsilon);
        (a.center_time - b.center_time).abs() < self.proximity_ratio * duration
    }
}

/// Merges externally supplied and locally detected candidates.
///
/// Inputs are concatenated (external first). Each incoming candidate is
/// compared against the representatives kept so far; a duplicate replaces its
/// representative only when it ranks strictly higher, otherwise it is dropped.
/// The survivors are sorted by rank, best first, with ties kept in
/// concatenation order, so equal inputs always give equal output.
#[must_use]
pub fn reconcile_candidates(
    external: &[TransitCandidate],
    local: &[TransitCandidate],
    config: &ReconcileConfig,
) -> Vec<TransitCandidate> {
    let mut kept: Vec<TransitCandidate> = Vec::with_capacity(external.len() + local.len());

    for candidate in external.iter().chain(local) {
        match kept
            .iter_mut()
            .find(|representative| config.are_duplicates(representative, candidate))
        {
            Some(representative) => {
                if candidate.rank_key() > representative.rank_key() {
                    *representative = *candidate;
                }
            }
            None => kept.push(*candidate),
        }
    }

    kept.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.rank_key())));
    debug!(
        external = external.len(),
        local = local.len(),
        reconciled = kept.len(),
        "reconciled transit candidates"
    );
    kept
}
