mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, DrawLayer, FrameStatus, NoDataReason, RenderFrame, Shape};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::ViewerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully built, deterministic `RenderFrame`, so drawing
/// stays isolated from series data and interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewerResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
