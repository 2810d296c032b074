use tracing::trace;

use crate::core::{DataPoint, PlotArea, PlotTransform, Viewport};
use crate::error::ViewerResult;
use crate::render::{
    DrawLayer, FrameStatus, NoDataReason, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
};

use super::LightCurveViewer;
use super::render_frame_builder::no_data_reason;

const WINDOW_BORDER_WIDTH_PX: f64 = 1.0;

impl<R: Renderer> LightCurveViewer<R> {
    /// Builds the overview strip for a separate `surface`: the primary curve
    /// over its full extent, plus the current viewport as a translucent
    /// window when one is set.
    ///
    /// Unusable data yields an empty `NoData` frame; the strip has no
    /// placeholder label.
    pub fn build_overview_frame(&self, surface: Viewport) -> ViewerResult<RenderFrame> {
        let surface = surface.ensure_valid()?;
        let mut frame = RenderFrame::new(surface);
        let primary = self.primary_curve();

        if let Some(reason) = no_data_reason(primary.health()) {
            frame.status = FrameStatus::NoData(reason);
            return Ok(frame);
        }
        let points: Vec<DataPoint> = primary.finite_points().collect();
        let transform = self.full_extent().and_then(|extent| {
            PlotTransform::fit(PlotArea::full_surface(surface), extent.full_range(), &points).ok()
        });
        let Some(transform) = transform else {
            frame.status = FrameStatus::NoData(NoDataReason::EmptySeries);
            return Ok(frame);
        };

        let style = &self.style;
        frame.push_polyline(
            DrawLayer::Overview,
            PolylinePrimitive::new(
                points
                    .iter()
                    .map(|point| (transform.time_to_x(point.time), transform.flux_to_y(point.flux)))
                    .collect(),
                style.overview_line_width,
                style.overview_line_color,
            ),
        );

        if let (Some(_), Some(range)) = (self.state.view_range(), self.visible_range()) {
            let x1 = transform.time_to_x(range.lo);
            let x2 = transform.time_to_x(range.hi);
            frame.push_rect(
                DrawLayer::Overview,
                RectPrimitive::new(
                    x1,
                    0.0,
                    (x2 - x1).max(0.0),
                    f64::from(surface.height),
                    style.overview_window_fill_color,
                )
                .with_border(WINDOW_BORDER_WIDTH_PX, style.overview_window_border_color),
            );
        }

        trace!(
            samples = points.len(),
            windowed = self.state.view_range().is_some(),
            "overview frame built"
        );
        Ok(frame)
    }
}
