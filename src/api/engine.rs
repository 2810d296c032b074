use indexmap::IndexMap;

use crate::analysis::{DetectorDiagnostics, TransitCandidate};
use crate::core::{Segment, SeriesStore};
use crate::error::ViewerResult;
use crate::extensions::{ViewerEvent, ViewerObserver};
use crate::render::{RenderFrame, Renderer};

use super::{RenderStyle, ViewState, ViewerConfig};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `LightCurveViewer` owns the curves, the reconciled candidate list and the
/// view state, turns pointer input into viewport changes, and hands pure
/// [`RenderFrame`]s to the renderer.
pub struct LightCurveViewer<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ViewerConfig,
    pub(super) store: SeriesStore,
    pub(super) state: ViewState,
    pub(super) external_candidates: Vec<TransitCandidate>,
    pub(super) local_candidates: Vec<TransitCandidate>,
    pub(super) candidates: Vec<TransitCandidate>,
    pub(super) segments: Option<Vec<Segment>>,
    pub(super) style: RenderStyle,
    pub(super) observers: IndexMap<String, Box<dyn ViewerObserver>>,
    pub(super) last_diagnostics: Option<DetectorDiagnostics>,
}

impl<R: Renderer> LightCurveViewer<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ViewerResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    /// Builds the current frame and executes it through the renderer.
    pub fn render(&mut self) -> ViewerResult<()> {
        let frame = self.build_frame()?;
        self.execute_frame(&frame)
    }

    /// Renders the current frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ViewerResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_event(ViewerEvent::Rendered {
            status: frame.status,
        });
        Ok(())
    }

    fn execute_frame(&mut self, frame: &RenderFrame) -> ViewerResult<()> {
        self.renderer.render(frame)?;
        self.emit_event(ViewerEvent::Rendered {
            status: frame.status,
        });
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
