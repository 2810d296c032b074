use serde::{Deserialize, Serialize};

use crate::core::view_range::TimeExtent;
use crate::error::{ViewerError, ViewerResult};

/// Labeled sub-range of the time axis used for guided navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl Segment {
    #[must_use]
    pub fn new(index: usize, start: f64, end: f64) -> Self {
        Self {
            index,
            start,
            end,
            center: 0.5 * (start + end),
        }
    }
}

/// Sizing rules for synthesized segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    pub samples_per_segment: usize,
    pub min_segments: usize,
    pub max_segments: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: 50,
            min_segments: 2,
            max_segments: 8,
        }
    }
}

impl SegmentConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        if self.samples_per_segment == 0 {
            return Err(ViewerError::InvalidData(
                "segment samples_per_segment must be > 0".to_owned(),
            ));
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(ViewerError::InvalidData(
                "segment count bounds must satisfy 0 < min <= max".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Number of pieces for `sample_count` samples, clamped to the bounds.
    #[must_use]
    pub fn segment_count(self, sample_count: usize) -> usize {
        let wanted = (sample_count as f64 / self.samples_per_segment as f64).round() as usize;
        wanted.clamp(self.min_segments, self.max_segments)
    }
}

/// Uniformly partitions `extent` into pieces sized to roughly
/// `samples_per_segment` samples each.
///
/// Returns nothing for an empty series. The last piece ends exactly on the
/// extent maximum so floating drift never leaves a gap.
#[must_use]
pub fn synthesize_segments(
    extent: TimeExtent,
    sample_count: usize,
    config: SegmentConfig,
) -> Vec<Segment> {
    if sample_count == 0 {
        return Vec::new();
    }
    let count = config.segment_count(sample_count);
    let width = extent.span() / count as f64;

    (0..count)
        .map(|index| {
            let start = extent.min() + width * index as f64;
            let end = if index + 1 == count {
                extent.max()
            } else {
                start + width
            };
            Segment::new(index, start, end)
        })
        .collect()
}
