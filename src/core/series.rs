use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::binning::bin_series;
use crate::core::types::DataPoint;
use crate::core::view_range::TimeExtent;
use crate::error::{ViewerError, ViewerResult};

/// Paired `time`/`flux` sequences describing one light curve.
///
/// Construction is lenient: mismatched lengths and non-finite samples are
/// accepted so a single bad sample never prevents the rest of the view from
/// rendering. Use [`Series::try_new`] when strict input is wanted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub time: Vec<f64>,
    pub flux: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(time: Vec<f64>, flux: Vec<f64>) -> Self {
        Self { time, flux }
    }

    /// Builds a series rejecting mismatched lengths.
    pub fn try_new(time: Vec<f64>, flux: Vec<f64>) -> ViewerResult<Self> {
        if time.len() != flux.len() {
            return Err(ViewerError::MalformedSeries {
                time_len: time.len(),
                flux_len: flux.len(),
            });
        }
        Ok(Self { time, flux })
    }

    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        Self {
            time: points.iter().map(|p| p.time).collect(),
            flux: points.iter().map(|p| p.flux).collect(),
        }
    }

    /// Number of usable pairs (the shorter of both sequences).
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len().min(self.flux.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn has_matching_lengths(&self) -> bool {
        self.time.len() == self.flux.len()
    }

    /// Pairs with both coordinates finite, in storage order.
    pub fn finite_points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.time
            .iter()
            .zip(&self.flux)
            .map(|(&time, &flux)| DataPoint::new(time, flux))
            .filter(|point| point.is_finite())
    }

    #[must_use]
    pub fn health(&self) -> SeriesHealth {
        if !self.has_matching_lengths() {
            return SeriesHealth::Malformed;
        }
        if self.is_empty() {
            return SeriesHealth::Empty;
        }
        if self.finite_points().next().is_none() {
            return SeriesHealth::Malformed;
        }
        SeriesHealth::Usable
    }

    /// Time extent over finite samples.
    #[must_use]
    pub fn extent(&self) -> Option<TimeExtent> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in self.finite_points() {
            min = min.min(point.time);
            max = max.max(point.time);
        }
        TimeExtent::new(min, max).ok()
    }
}

/// Coarse classification used to pick the "no data" branch while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesHealth {
    Usable,
    Empty,
    /// Mismatched lengths or no finite sample at all.
    Malformed,
}

/// Which of the three stored curves a draw or lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Raw,
    Processed,
    Binned,
}

/// Raw and processed curves plus the block-averaged curve derived from the
/// processed one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesStore {
    raw: Series,
    processed: Series,
    binned: Series,
    bin_target: usize,
}

impl SeriesStore {
    #[must_use]
    pub fn new(raw: Series, processed: Series, bin_target: usize) -> Self {
        let mut store = Self {
            bin_target,
            ..Self::default()
        };
        store.set_raw(raw);
        store.set_processed(processed);
        store
    }

    #[must_use]
    pub fn raw(&self) -> &Series {
        &self.raw
    }

    #[must_use]
    pub fn processed(&self) -> &Series {
        &self.processed
    }

    #[must_use]
    pub fn binned(&self) -> &Series {
        &self.binned
    }

    #[must_use]
    pub fn bin_target(&self) -> usize {
        self.bin_target
    }

    #[must_use]
    pub fn curve(&self, kind: CurveKind) -> &Series {
        match kind {
            CurveKind::Raw => &self.raw,
            CurveKind::Processed => &self.processed,
            CurveKind::Binned => &self.binned,
        }
    }

    pub fn set_raw(&mut self, raw: Series) {
        if !raw.has_matching_lengths() {
            warn!(
                time_len = raw.time.len(),
                flux_len = raw.flux.len(),
                "raw curve has mismatched lengths"
            );
        }
        self.raw = raw;
    }

    /// Replaces the processed curve and recomputes the binned curve from it.
    pub fn set_processed(&mut self, processed: Series) {
        if !processed.has_matching_lengths() {
            warn!(
                time_len = processed.time.len(),
                flux_len = processed.flux.len(),
                "processed curve has mismatched lengths"
            );
        }
        self.binned = bin_series(&processed, self.bin_target);
        debug!(
            processed_len = processed.len(),
            binned_len = self.binned.len(),
            bin_target = self.bin_target,
            "recomputed binned curve"
        );
        self.processed = processed;
    }

    pub fn set_bin_target(&mut self, bin_target: usize) {
        self.bin_target = bin_target;
        self.binned = bin_series(&self.processed, bin_target);
    }
}

/// Independent show/hide flags for the three curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveVisibility {
    pub raw: bool,
    pub processed: bool,
    pub binned: bool,
}

impl Default for CurveVisibility {
    fn default() -> Self {
        Self {
            raw: false,
            processed: true,
            binned: false,
        }
    }
}

impl CurveVisibility {
    #[must_use]
    pub fn shows(self, kind: CurveKind) -> bool {
        match kind {
            CurveKind::Raw => self.raw,
            CurveKind::Processed => self.processed,
            CurveKind::Binned => self.binned,
        }
    }

    /// Primary curve implied by the flags: processed wins, then raw.
    #[must_use]
    pub fn implied_view_mode(self) -> Option<CurveKind> {
        if self.processed {
            Some(CurveKind::Processed)
        } else if self.raw {
            Some(CurveKind::Raw)
        } else {
            None
        }
    }
}
