//! Local transit detector.
//!
//! Dips are found as peaks of the inverted, smoothed flux that clear a
//! threshold derived from robust statistics. The function is pure: the same
//! series and config always produce the same ranked list.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "parallel-detection")]
use rayon::prelude::*;

use crate::analysis::candidate::TransitCandidate;
use crate::core::series::Series;
use crate::core::stats::{median, robust_scale};
use crate::error::{ViewerError, ViewerResult};

const MIN_SMOOTHING_DIVISOR: f64 = 1.0;
const MAX_WINDOW_PAD_FACTOR: usize = 1_000;

/// Heuristic constants of the detector.
///
/// Defaults are the values the viewer has always shipped with; they are
/// uncalibrated against labeled data and kept configurable for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Shorter series yield no candidates.
    pub min_samples: usize,
    pub max_candidates: usize,
    /// Smoothing half-width is `round(len / smoothing_divisor)`.
    pub smoothing_divisor: f64,
    pub min_half_width: usize,
    /// Threshold offset above the median, in robust-scale units.
    pub threshold_sigma: f64,
    pub threshold_floor: f64,
    /// Minimum peak separation is `round(separation_factor * half_width)`.
    pub separation_factor: f64,
    pub min_separation: usize,
    /// Candidate window reaches `window_pad_factor * half_width` samples each side.
    pub window_pad_factor: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_samples: 20,
            max_candidates: 25,
            smoothing_divisor: 300.0,
            min_half_width: 3,
            threshold_sigma: 1.5,
            threshold_floor: 1e-6,
            separation_factor: 1.5,
            min_separation: 3,
            window_pad_factor: 2,
        }
    }
}

impl DetectorConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        if self.min_samples < 3 {
            return Err(ViewerError::InvalidData(
                "detector min_samples must be >= 3".to_owned(),
            ));
        }
        if self.max_candidates == 0 {
            return Err(ViewerError::InvalidData(
                "detector max_candidates must be > 0".to_owned(),
            ));
        }
        if !self.smoothing_divisor.is_finite() || self.smoothing_divisor < MIN_SMOOTHING_DIVISOR {
            return Err(ViewerError::InvalidData(format!(
                "detector `smoothing_divisor` must be finite and >= {MIN_SMOOTHING_DIVISOR}"
            )));
        }
        if self.window_pad_factor > MAX_WINDOW_PAD_FACTOR {
            return Err(ViewerError::InvalidData(format!(
                "detector `window_pad_factor` must be <= {MAX_WINDOW_PAD_FACTOR}"
            )));
        }
        if !self.separation_factor.is_finite() || self.separation_factor <= 0.0 {
            return Err(ViewerError::InvalidData(
                "detector `separation_factor` must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("threshold_sigma", self.threshold_sigma),
            ("threshold_floor", self.threshold_floor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "detector `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    /// Never exceeds `len`, so index arithmetic around a sample stays in range.
    #[must_use]
    pub fn half_width(&self, len: usize) -> usize {
        let scaled = (len as f64 / self.smoothing_divisor).round() as usize;
        scaled.max(self.min_half_width).min(len)
    }

    #[must_use]
    pub fn separation(&self, half_width: usize) -> usize {
        let scaled = (self.separation_factor * half_width as f64).round() as usize;
        scaled.max(self.min_separation)
    }
}

/// Intermediate values of one detection pass, for threshold calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorDiagnostics {
    pub samples: usize,
    pub half_width: usize,
    pub min_separation: usize,
    pub baseline: f64,
    pub noise_scale: f64,
    pub threshold: f64,
    pub accepted_peaks: usize,
}

/// Runs the detector and returns candidates ranked by score, best first.
#[must_use]
pub fn detect_transit_candidates(series: &Series, config: &DetectorConfig) -> Vec<TransitCandidate> {
    detect_with_diagnostics(series, config).0
}

/// Same as [`detect_transit_candidates`], also returning the pass diagnostics
/// when the series was long enough to analyze.
#[must_use]
pub fn detect_with_diagnostics(
    series: &Series,
    config: &DetectorConfig,
) -> (Vec<TransitCandidate>, Option<DetectorDiagnostics>) {
    let config = match config.validate() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "skipping local detection due to invalid detector config");
            return (Vec::new(), None);
        }
    };

    let (time, flux): (Vec<f64>, Vec<f64>) =
        series.finite_points().map(|p| (p.time, p.flux)).unzip();
    let n = time.len();
    if n < config.min_samples {
        debug!(samples = n, min_samples = config.min_samples, "series too short for detection");
        return (Vec::new(), None);
    }

    let half_width = config.half_width(n);
    let inverted: Vec<f64> = moving_average(&flux, half_width)
        .into_iter()
        .map(|v| -v)
        .collect();

    let (Ok(baseline), Ok(noise_scale)) = (median(&inverted), robust_scale(&inverted)) else {
        return (Vec::new(), None);
    };
    let threshold = baseline + (config.threshold_sigma * noise_scale).max(config.threshold_floor);
    let min_separation = config.separation(half_width);

    let peaks = find_separated_peaks(&inverted, threshold, min_separation);
    let pad = config.window_pad_factor.saturating_mul(half_width);

    let mut candidates: Vec<TransitCandidate> = peaks
        .iter()
        .map(|&i| {
            let depth = inverted[i] - baseline;
            TransitCandidate::new(
                time[i],
                time[i.saturating_sub(pad)],
                time[i.saturating_add(pad).min(n - 1)],
                depth,
            )
            .with_score(depth / noise_scale)
        })
        .collect();

    candidates.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.rank_key())));
    candidates.truncate(config.max_candidates);

    let diagnostics = DetectorDiagnostics {
        samples: n,
        half_width,
        min_separation,
        baseline,
        noise_scale,
        threshold,
        accepted_peaks: peaks.len(),
    };
    debug!(
        samples = n,
        half_width,
        threshold,
        noise_scale,
        peaks = peaks.len(),
        returned = candidates.len(),
        "local transit detection finished"
    );
    (candidates, Some(diagnostics))
}

/// Centered moving average with half-width `half_width`; windows shrink at the
/// boundaries instead of wrapping.
#[must_use]
pub fn moving_average(values: &[f64], half_width: usize) -> Vec<f64> {
    let n = values.len();
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for &v in values {
        acc += v;
        prefix.push(acc);
    }

    let window_mean = |i: usize| {
        let lo = i.saturating_sub(half_width);
        let hi = i.saturating_add(half_width).min(n - 1);
        (prefix[hi + 1] - prefix[lo]) / (hi + 1 - lo) as f64
    };

    #[cfg(feature = "parallel-detection")]
    {
        (0..n).into_par_iter().map(window_mean).collect()
    }

    #[cfg(not(feature = "parallel-detection"))]
    {
        (0..n).map(window_mean).collect()
    }
}

/// Strict local maxima above `threshold`, at least `min_separation` apart.
///
/// A peak closer than `min_separation` to the previously accepted one replaces
/// it when stronger and is discarded otherwise.
#[must_use]
pub fn find_separated_peaks(signal: &[f64], threshold: f64, min_separation: usize) -> Vec<usize> {
    let mut peaks: Vec<usize> = Vec::new();
    if signal.len() < 3 {
        return peaks;
    }

    for i in 1..signal.len() - 1 {
        let value = signal[i];
        if !(value > signal[i - 1] && value >= signal[i + 1] && value > threshold) {
            continue;
        }
        match peaks.last_mut() {
            Some(last) if i - *last < min_separation => {
                if value > signal[*last] {
                    *last = i;
                }
            }
            _ => peaks.push(i),
        }
    }
    peaks
}
