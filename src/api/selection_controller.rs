use tracing::debug;

use crate::core::ViewRange;
use crate::error::{ViewerError, ViewerResult};
use crate::extensions::ViewerEvent;
use crate::render::Renderer;

use super::LightCurveViewer;
use super::navigation_resolver::{resolve_candidate_frame, resolve_segment_frame};

impl<R: Renderer> LightCurveViewer<R> {
    /// Selects a reconciled candidate by index and frames it, or clears the
    /// selection (leaving the viewport as is) with `None`.
    ///
    /// Takes precedence over a drag in progress.
    pub fn select_candidate(&mut self, index: Option<usize>) -> ViewerResult<()> {
        if let Some(index) = index {
            if index >= self.candidates.len() {
                return Err(ViewerError::InvalidData(format!(
                    "candidate index {index} out of range for {} candidates",
                    self.candidates.len()
                )));
            }
        }
        self.state.select_candidate(index);
        self.emit_event(ViewerEvent::CandidateSelected { index });
        if let Some(index) = index {
            self.frame_candidate(index);
        }
        Ok(())
    }

    /// Frames `segments[index]` exactly, without padding.
    pub fn select_segment(&mut self, index: usize) -> ViewerResult<()> {
        let segments = self.effective_segments();
        let segment = segments.get(index).ok_or_else(|| {
            ViewerError::InvalidData(format!(
                "segment index {index} out of range for {} segments",
                segments.len()
            ))
        })?;
        self.state.select_segment(index);
        self.emit_event(ViewerEvent::SegmentSelected { index });

        let Some(extent) = self.full_extent() else {
            return Ok(());
        };
        if let Some(range) =
            resolve_segment_frame(segment, extent, self.config.navigation.min_span_ratio)
        {
            self.apply_view_range(Some(range));
        }
        Ok(())
    }

    /// Host-imposed viewport. `None` returns to the full extent.
    pub fn set_forced_view_range(&mut self, range: Option<(f64, f64)>) -> ViewerResult<()> {
        let Some((lo, hi)) = range else {
            self.apply_view_range(None);
            return Ok(());
        };
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ViewerError::InvalidData(
                "forced view range must be finite with lo < hi".to_owned(),
            ));
        }
        self.state.interaction_mut().cancel_pan();
        let requested = ViewRange::new(lo, hi);
        let range = match self.full_extent() {
            Some(extent) => extent.clamp(requested, self.config.navigation.min_span_ratio),
            None => requested,
        };
        self.apply_view_range(Some(range));
        Ok(())
    }

    /// Shows the full extent again.
    pub fn reset_view(&mut self) {
        self.state.interaction_mut().cancel_pan();
        self.apply_view_range(None);
    }

    /// Frames the best-ranked candidate with a wider pad than a regular
    /// selection. Returns `false` when there is nothing to frame.
    pub fn frame_top_candidate(&mut self) -> bool {
        let (Some(candidate), Some(extent)) = (self.candidates.first(), self.full_extent()) else {
            return false;
        };
        let navigation = self.config.navigation;
        let Some(range) = resolve_candidate_frame(
            candidate,
            extent,
            navigation.top_candidate_pad_ratio,
            navigation.zero_duration_pad_ratio,
            navigation.min_span_ratio,
        ) else {
            return false;
        };
        self.state.interaction_mut().cancel_pan();
        self.apply_view_range(Some(range));
        true
    }

    pub(super) fn frame_candidate(&mut self, index: usize) {
        let (Some(candidate), Some(extent)) = (self.candidates.get(index), self.full_extent())
        else {
            return;
        };
        let navigation = self.config.navigation;
        if let Some(range) = resolve_candidate_frame(
            candidate,
            extent,
            navigation.candidate_pad_ratio,
            navigation.zero_duration_pad_ratio,
            navigation.min_span_ratio,
        ) {
            self.apply_view_range(Some(range));
        }
    }

    pub(super) fn apply_view_range(&mut self, range: Option<ViewRange>) {
        if !self.state.set_view_range(range) {
            return;
        }
        debug!(
            lo = range.map(|r| r.lo),
            hi = range.map(|r| r.hi),
            "view range changed"
        );
        self.emit_event(ViewerEvent::ViewRangeChanged { range });
    }
}
