use serde::{Deserialize, Serialize};

use crate::analysis::TransitCandidate;
use crate::core::{CurveKind, CurveVisibility, ViewRange, Viewport};
use crate::interaction::{HoverPoint, PointerMode};
use crate::render::FrameStatus;

/// Read-only view of the viewer passed along with every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub viewport: Viewport,
    pub view_mode: CurveKind,
    pub visibility: CurveVisibility,
    pub full_extent: Option<(f64, f64)>,
    pub view_range: Option<ViewRange>,
    pub pointer_mode: PointerMode,
    pub candidates_len: usize,
    pub selected_candidate: Option<usize>,
}

/// Notifications delivered to observers.
///
/// `LocalDetectionCompleted` and `ViewModeChanged` are how a host learns about
/// detector results and the built-in raw/processed toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewerEvent {
    CurvesLoaded { raw_len: usize, processed_len: usize },
    ViewModeChanged { mode: CurveKind },
    VisibilityChanged { visibility: CurveVisibility },
    ViewRangeChanged { range: Option<ViewRange> },
    CandidatesChanged { count: usize },
    CandidateSelected { index: Option<usize> },
    SegmentSelected { index: usize },
    LocalDetectionCompleted { candidates: Vec<TransitCandidate> },
    PointerMoved { x: f64, y: f64, hover: Option<HoverPoint> },
    PointerLeft,
    PanStarted,
    PanEnded,
    Rendered { status: FrameStatus },
}

/// Hook for host logic that reacts to viewer changes without reaching into
/// viewer internals.
pub trait ViewerObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ViewerEvent, context: &ViewerContext);
}
