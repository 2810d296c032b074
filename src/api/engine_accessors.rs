use tracing::debug;

use crate::analysis::{DetectorDiagnostics, TransitCandidate};
use crate::core::{
    CurveKind, PlotArea, Series, SeriesStore, TimeExtent, ViewRange, Viewport,
};
use crate::error::ViewerResult;
use crate::interaction::{HoverPoint, PointerMode};
use crate::render::Renderer;

use super::{LightCurveViewer, ViewState, ViewerConfig};

impl<R: Renderer> LightCurveViewer<R> {
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resizes the drawing surface.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ViewerResult<()> {
        self.config.viewport = viewport.ensure_valid()?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "viewer surface resized"
        );
        Ok(())
    }

    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: f64) -> ViewerResult<()> {
        self.config = self
            .config
            .with_device_pixel_ratio(device_pixel_ratio)
            .validate()?;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn series_store(&self) -> &SeriesStore {
        &self.store
    }

    #[must_use]
    pub fn view_mode(&self) -> CurveKind {
        self.state.view_mode()
    }

    /// Curve selected by the view mode.
    #[must_use]
    pub fn primary_curve(&self) -> &Series {
        self.store.curve(self.state.view_mode())
    }

    /// Time extent of the primary curve, `None` when it has no finite sample.
    #[must_use]
    pub fn full_extent(&self) -> Option<TimeExtent> {
        self.primary_curve().extent()
    }

    /// Stored viewport clamped to the extent, or the full extent when unset.
    #[must_use]
    pub fn visible_range(&self) -> Option<ViewRange> {
        let extent = self.full_extent()?;
        Some(match self.state.view_range() {
            Some(range) => extent.clamp(range, self.config.navigation.min_span_ratio),
            None => extent.full_range(),
        })
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_surface(self.config.viewport, self.config.padding)
    }

    #[must_use]
    pub fn pointer_mode(&self) -> PointerMode {
        self.state.interaction().mode()
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverPoint> {
        self.state.interaction().hover()
    }

    /// Reconciled candidates, best first.
    #[must_use]
    pub fn candidates(&self) -> &[TransitCandidate] {
        &self.candidates
    }

    #[must_use]
    pub fn external_candidates(&self) -> &[TransitCandidate] {
        &self.external_candidates
    }

    #[must_use]
    pub fn local_candidates(&self) -> &[TransitCandidate] {
        &self.local_candidates
    }

    #[must_use]
    pub fn selected_candidate(&self) -> Option<usize> {
        self.state.selected_candidate()
    }

    /// Diagnostics of the last local detection pass, if it ran.
    #[must_use]
    pub fn last_detection_diagnostics(&self) -> Option<DetectorDiagnostics> {
        self.last_diagnostics
    }
}
