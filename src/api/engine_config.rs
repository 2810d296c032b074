use serde::{Deserialize, Serialize};

use crate::analysis::{DetectorConfig, ReconcileConfig};
use crate::core::{DEFAULT_BIN_TARGET, PlotPadding, SegmentConfig, Viewport};
use crate::error::{ViewerError, ViewerResult};
use crate::extensions::CandidateMarkerGeometry;

/// Pan/zoom and auto-framing tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Half-span multiplier for a wheel step away from the user (zoom out).
    pub zoom_out_factor: f64,
    /// Half-span multiplier for a wheel step towards the user (zoom in).
    pub zoom_in_factor: f64,
    /// Smallest viewport span as a fraction of the full extent.
    pub min_span_ratio: f64,
    /// Padding around a selected candidate, as a fraction of its duration.
    pub candidate_pad_ratio: f64,
    /// Padding for zero-duration candidates, as a fraction of the full extent.
    pub zero_duration_pad_ratio: f64,
    /// Padding used by "zoom to top candidate".
    pub top_candidate_pad_ratio: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            zoom_out_factor: 1.15,
            zoom_in_factor: 0.85,
            min_span_ratio: 1e-9,
            candidate_pad_ratio: 0.8,
            zero_duration_pad_ratio: 0.02,
            top_candidate_pad_ratio: 1.0,
        }
    }
}

impl NavigationConfig {
    pub fn validate(self) -> ViewerResult<Self> {
        if !self.zoom_out_factor.is_finite() || self.zoom_out_factor <= 1.0 {
            return Err(ViewerError::InvalidData(
                "zoom_out_factor must be finite and > 1".to_owned(),
            ));
        }
        if !self.zoom_in_factor.is_finite()
            || self.zoom_in_factor <= 0.0
            || self.zoom_in_factor >= 1.0
        {
            return Err(ViewerError::InvalidData(
                "zoom_in_factor must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !self.min_span_ratio.is_finite()
            || self.min_span_ratio <= 0.0
            || self.min_span_ratio >= 1.0
        {
            return Err(ViewerError::InvalidData(
                "min_span_ratio must be finite and in (0, 1)".to_owned(),
            ));
        }
        for (name, value) in [
            ("candidate_pad_ratio", self.candidate_pad_ratio),
            ("zero_duration_pad_ratio", self.zero_duration_pad_ratio),
            ("top_candidate_pad_ratio", self.top_candidate_pad_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "navigation `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

fn default_bin_target_points() -> usize {
    DEFAULT_BIN_TARGET
}

/// Viewer bootstrap configuration.
///
/// Serializable so hosts can persist and reload the viewer setup; every field
/// except the surface size falls back to its default when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: PlotPadding,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    #[serde(default = "default_bin_target_points")]
    pub bin_target_points: usize,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub segments: SegmentConfig,
    #[serde(default)]
    pub markers: CandidateMarkerGeometry,
}

impl ViewerConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: PlotPadding::default(),
            device_pixel_ratio: default_device_pixel_ratio(),
            bin_target_points: default_bin_target_points(),
            detector: DetectorConfig::default(),
            reconcile: ReconcileConfig::default(),
            navigation: NavigationConfig::default(),
            segments: SegmentConfig::default(),
            markers: CandidateMarkerGeometry::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }

    #[must_use]
    pub fn with_bin_target_points(mut self, bin_target_points: usize) -> Self {
        self.bin_target_points = bin_target_points;
        self
    }

    #[must_use]
    pub fn with_detector(mut self, detector: DetectorConfig) -> Self {
        self.detector = detector;
        self
    }

    #[must_use]
    pub fn with_reconcile(mut self, reconcile: ReconcileConfig) -> Self {
        self.reconcile = reconcile;
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: SegmentConfig) -> Self {
        self.segments = segments;
        self
    }

    pub fn validate(self) -> ViewerResult<Self> {
        self.viewport.ensure_valid()?;
        self.padding.validate()?;
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(ViewerError::InvalidData(
                "device_pixel_ratio must be finite and > 0".to_owned(),
            ));
        }
        if self.bin_target_points == 0 {
            return Err(ViewerError::InvalidData(
                "bin_target_points must be > 0".to_owned(),
            ));
        }
        self.detector.validate()?;
        self.reconcile.validate()?;
        self.navigation.validate()?;
        self.segments.validate()?;
        self.markers.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ViewerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewerError::InvalidData(format!("failed to serialize viewer config: {e}")))
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> ViewerResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ViewerError::InvalidData(format!("failed to parse viewer config: {e}")))?;
        config.validate()
    }
}
