use serde::{Deserialize, Serialize};

use crate::analysis::TransitCandidate;
use crate::core::{CurveKind, CurveVisibility, Segment, ViewRange, Viewport};
use crate::interaction::{HoverPoint, PointerMode};
use crate::render::Renderer;

use super::LightCurveViewer;

/// Serializable view of the viewer state, for regression fixtures and for
/// hosts that persist the view between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSnapshot {
    pub viewport: Viewport,
    pub view_mode: CurveKind,
    pub visibility: CurveVisibility,
    pub full_extent: Option<(f64, f64)>,
    pub view_range: Option<ViewRange>,
    pub pointer_mode: PointerMode,
    pub hover: Option<HoverPoint>,
    pub selected_candidate: Option<usize>,
    pub selected_segment: Option<usize>,
    pub candidates: Vec<TransitCandidate>,
    pub segments: Vec<Segment>,
    pub raw_len: usize,
    pub processed_len: usize,
    pub binned_len: usize,
}

impl<R: Renderer> LightCurveViewer<R> {
    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        let state = &self.state;
        ViewerSnapshot {
            viewport: self.config.viewport,
            view_mode: state.view_mode(),
            visibility: state.visibility(),
            full_extent: self
                .full_extent()
                .map(|extent| (extent.min(), extent.max())),
            view_range: state.view_range(),
            pointer_mode: state.interaction().mode(),
            hover: state.interaction().hover(),
            selected_candidate: state.selected_candidate(),
            selected_segment: state.selected_segment(),
            candidates: self.candidates.clone(),
            segments: self.effective_segments(),
            raw_len: self.store.raw().len(),
            processed_len: self.store.processed().len(),
            binned_len: self.store.binned().len(),
        }
    }
}
