use serde::{Deserialize, Serialize};

/// A hypothesized transit dip.
///
/// Candidates are plain values: two candidates describe "the same" event only
/// when their centers are close in time, never by identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitCandidate {
    pub center_time: f64,
    pub start_time: f64,
    pub end_time: f64,
    /// Non-negative magnitude of the dip below the baseline.
    pub depth: f64,
    /// Depth divided by the estimated noise scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl TransitCandidate {
    #[must_use]
    pub fn new(center_time: f64, start_time: f64, end_time: f64, depth: f64) -> Self {
        Self {
            center_time,
            start_time,
            end_time,
            depth,
            score: None,
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// `|end - start|`, or `None` when either bound is not finite.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        let duration = (self.end_time - self.start_time).abs();
        duration.is_finite().then_some(duration)
    }

    /// Ranking key: score, else depth, else zero.
    #[must_use]
    pub fn rank_key(&self) -> f64 {
        self.score
            .filter(|score| score.is_finite())
            .or_else(|| self.depth.is_finite().then_some(self.depth))
            .unwrap_or(0.0)
    }
}
