use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Span given to an extent built from a single distinct timestamp.
const DEGENERATE_EXTENT_SPAN: f64 = 1.0;

/// Visible time window `[lo, hi]` in data units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    pub lo: f64,
    pub hi: f64,
}

impl ViewRange {
    #[must_use]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.hi - self.lo
    }

    #[must_use]
    pub fn center(self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.lo && time <= self.hi
    }

    /// True when `[start, end]` intersects this window (touching counts).
    #[must_use]
    pub fn overlaps(self, start: f64, end: f64) -> bool {
        !(end < self.lo || start > self.hi)
    }

    /// Shifts both bounds by `delta`. No clamping.
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self::new(self.lo + delta, self.hi + delta)
    }

    /// Scales the half-spans on each side of `anchor` by `factor`.
    ///
    /// `factor > 1.0` widens the window, `factor < 1.0` narrows it. The anchor
    /// keeps its position. No clamping.
    #[must_use]
    pub fn zoomed_around(self, anchor: f64, factor: f64) -> Self {
        Self::new(
            anchor - (anchor - self.lo) * factor,
            anchor + (self.hi - anchor) * factor,
        )
    }
}

/// Full time extent of the active series, the outer bound for every viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeExtent {
    min: f64,
    max: f64,
}

impl TimeExtent {
    /// Builds an extent, widening a zero-width range so spans stay non-zero.
    pub fn new(min: f64, max: f64) -> ViewerResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ViewerError::InvalidData(
                "time extent must be finite".to_owned(),
            ));
        }
        if min == max {
            let half = DEGENERATE_EXTENT_SPAN / 2.0;
            return Ok(Self {
                min: min - half,
                max: max + half,
            });
        }
        Ok(Self {
            min: min.min(max),
            max: min.max(max),
        })
    }

    /// Extent over the finite entries of `times`; `None` when there are none.
    #[must_use]
    pub fn from_times(times: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &t in times.iter().filter(|t| t.is_finite()) {
            min = min.min(t);
            max = max.max(t);
        }
        Self::new(min, max).ok()
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn full_range(self) -> ViewRange {
        ViewRange::new(self.min, self.max)
    }

    #[must_use]
    pub fn min_span(self, min_span_ratio: f64) -> f64 {
        self.span() * min_span_ratio
    }

    /// Clamps each bound into the extent independently, then enforces the
    /// minimum span by widening around the window center.
    #[must_use]
    pub fn clamp(self, range: ViewRange, min_span_ratio: f64) -> ViewRange {
        if !range.lo.is_finite() || !range.hi.is_finite() {
            return self.full_range();
        }
        let (lo, hi) = if range.lo <= range.hi {
            (range.lo, range.hi)
        } else {
            (range.hi, range.lo)
        };
        let lo = lo.max(self.min);
        let hi = hi.min(self.max);

        let min_span = self.min_span(min_span_ratio);
        if hi - lo >= min_span {
            return ViewRange::new(lo, hi);
        }

        let half = min_span / 2.0;
        let center = (0.5 * (lo + hi)).clamp(self.min + half, self.max - half);
        ViewRange::new(center - half, center + half)
    }

    /// Moves the window back inside the extent without changing its span.
    /// A window at least as wide as the extent becomes the full extent.
    #[must_use]
    pub fn clamp_preserving_span(self, range: ViewRange, min_span_ratio: f64) -> ViewRange {
        let span = range.span();
        if !span.is_finite() {
            return self.clamp(range, min_span_ratio);
        }
        if span >= self.span() {
            return self.full_range();
        }

        let mut shifted = range;
        if shifted.lo < self.min {
            shifted = ViewRange::new(self.min, self.min + span);
        }
        if shifted.hi > self.max {
            shifted = ViewRange::new(self.max - span, self.max);
        }
        self.clamp(shifted, min_span_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeExtent, ViewRange};

    #[test]
    fn single_timestamp_extent_gets_unit_span() {
        let extent = TimeExtent::from_times(&[4.0, 4.0]).expect("extent");
        assert_eq!(extent.full_range(), ViewRange::new(3.5, 4.5));
    }

    #[test]
    fn non_finite_times_are_ignored() {
        let extent = TimeExtent::from_times(&[f64::NAN, 1.0, 3.0, f64::INFINITY]).expect("extent");
        assert_eq!((extent.min(), extent.max()), (1.0, 3.0));
        assert!(TimeExtent::from_times(&[f64::NAN]).is_none());
    }

    #[test]
    fn pan_shift_keeps_span_inside_extent() {
        let extent = TimeExtent::new(0.0, 100.0).expect("extent");
        let moved = extent.clamp_preserving_span(ViewRange::new(-10.0, 10.0), 1e-9);
        assert_eq!(moved, ViewRange::new(0.0, 20.0));
        let wide = extent.clamp_preserving_span(ViewRange::new(-5.0, 120.0), 1e-9);
        assert_eq!(wide, extent.full_range());
    }

    #[test]
    fn window_entirely_outside_collapses_to_min_span_at_edge() {
        let extent = TimeExtent::new(0.0, 100.0).expect("extent");
        let clamped = extent.clamp(ViewRange::new(200.0, 300.0), 1e-3);
        assert!((clamped.hi - 100.0).abs() <= 1e-9);
        assert!((clamped.span() - 0.1).abs() <= 1e-9);
    }
}
