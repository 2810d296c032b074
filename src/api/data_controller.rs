use tracing::{debug, warn};

use crate::core::{
    CurveKind, CurveVisibility, Segment, Series, SeriesHealth, synthesize_segments,
};
use crate::error::{ViewerError, ViewerResult};
use crate::extensions::ViewerEvent;
use crate::render::Renderer;

use super::LightCurveViewer;

impl<R: Renderer> LightCurveViewer<R> {
    /// Replaces both curves wholesale and recomputes the binned curve.
    ///
    /// The viewport, hover readout and local detection results belong to the
    /// previous curves and are dropped. Malformed input is accepted and later
    /// rendered as the "no data" placeholder.
    pub fn set_curves(&mut self, raw: Series, processed: Series) {
        for (name, series) in [("raw", &raw), ("processed", &processed)] {
            if series.health() == SeriesHealth::Malformed {
                warn!(
                    curve = name,
                    time_len = series.time.len(),
                    flux_len = series.flux.len(),
                    "curve is malformed and will render as no data"
                );
            }
        }

        let raw_len = raw.len();
        let processed_len = processed.len();
        self.store.set_raw(raw);
        self.store.set_processed(processed);
        self.state.reset_for_new_curves();
        self.local_candidates.clear();
        self.last_diagnostics = None;
        debug!(raw_len, processed_len, "curves loaded");

        self.emit_event(ViewerEvent::CurvesLoaded {
            raw_len,
            processed_len,
        });
        self.refresh_candidates();
    }

    /// Changes the block-averaging target and recomputes the binned curve.
    pub fn set_bin_target(&mut self, bin_target_points: usize) -> ViewerResult<()> {
        self.config = self
            .config
            .with_bin_target_points(bin_target_points)
            .validate()?;
        self.store.set_bin_target(bin_target_points);
        debug!(
            bin_target_points,
            binned_len = self.store.binned().len(),
            "bin target changed"
        );
        Ok(())
    }

    /// Explicit segments, or `None` to let the viewer synthesize them.
    pub fn set_segments(&mut self, segments: Option<Vec<Segment>>) {
        debug!(
            explicit = segments.as_ref().map(Vec::len),
            "segments updated"
        );
        self.segments = segments;
    }

    /// Segments currently in effect: explicit ones when supplied, otherwise a
    /// uniform partition of the primary curve's extent.
    #[must_use]
    pub fn effective_segments(&self) -> Vec<Segment> {
        if let Some(segments) = &self.segments {
            return segments.clone();
        }
        let Some(extent) = self.full_extent() else {
            return Vec::new();
        };
        let sample_count = self.primary_curve().finite_points().count();
        synthesize_segments(extent, sample_count, self.config.segments)
    }

    #[must_use]
    pub fn visibility(&self) -> CurveVisibility {
        self.state.visibility()
    }

    /// Applies new show flags. The view mode follows them: processed wins,
    /// then raw; with neither shown the mode is left unchanged.
    pub fn set_visibility(&mut self, visibility: CurveVisibility) {
        if self.state.visibility() == visibility {
            return;
        }
        let mode_change = self.state.set_visibility(visibility);
        debug!(
            raw = visibility.raw,
            processed = visibility.processed,
            binned = visibility.binned,
            "curve visibility changed"
        );
        self.emit_event(ViewerEvent::VisibilityChanged { visibility });
        if let Some(mode) = mode_change {
            self.emit_event(ViewerEvent::ViewModeChanged { mode });
        }
    }

    /// The built-in raw/processed toggle. Binned is an overlay and cannot be
    /// the primary curve.
    pub fn set_view_mode(&mut self, mode: CurveKind) -> ViewerResult<()> {
        if mode == CurveKind::Binned {
            return Err(ViewerError::InvalidData(
                "binned curve cannot be the primary view mode".to_owned(),
            ));
        }
        if self.state.set_view_mode(mode) {
            debug!(?mode, "view mode changed");
            self.emit_event(ViewerEvent::ViewModeChanged { mode });
        }
        Ok(())
    }
}
