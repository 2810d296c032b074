use tracing::trace;

use crate::core::{CurveKind, PlotTransform, SeriesHealth, Viewport, points_in_time_window};
use crate::error::ViewerResult;
use crate::extensions::place_candidate_markers;
use crate::render::{
    CirclePrimitive, DrawLayer, FrameStatus, LinePrimitive, NoDataReason, PolylinePrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{LightCurveViewer, RenderStyle};
use super::axis_ticks::push_axis_commands;

const NO_DATA_TEXT: &str = "No data";
const NO_DATA_IN_RANGE_TEXT: &str = "No data in current range";

const SEGMENT_LABEL_INSET_PX: f64 = 4.0;
const SEGMENT_END_LABEL_BACKOFF_PX: f64 = 24.0;
const SEGMENT_LABEL_Y_OFFSET_PX: f64 = 12.0;

const TOOLTIP_POINTER_GAP_PX: f64 = 8.0;
const TOOLTIP_EDGE_MARGIN_PX: f64 = 8.0;
const TOOLTIP_HEIGHT_PX: f64 = 22.0;
const TOOLTIP_RISE_PX: f64 = 28.0;
const TOOLTIP_TEXT_INSET_PX: f64 = 6.0;
/// Average glyph advance as a fraction of the font size.
const TOOLTIP_GLYPH_WIDTH_RATIO: f64 = 7.0 / 12.0;

/// Maps the primary curve's health onto the placeholder it renders as.
pub(super) fn no_data_reason(health: SeriesHealth) -> Option<NoDataReason> {
    match health {
        SeriesHealth::Usable => None,
        SeriesHealth::Empty => Some(NoDataReason::EmptySeries),
        SeriesHealth::Malformed => Some(NoDataReason::MalformedSeries),
    }
}

fn placeholder_text(reason: NoDataReason) -> &'static str {
    match reason {
        NoDataReason::EmptySeries | NoDataReason::MalformedSeries => NO_DATA_TEXT,
        NoDataReason::EmptyWindow => NO_DATA_IN_RANGE_TEXT,
    }
}

fn placeholder_frame(surface: Viewport, reason: NoDataReason, style: &RenderStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(surface);
    frame.status = FrameStatus::NoData(reason);
    frame.push_text(
        DrawLayer::Placeholder,
        TextPrimitive::new(
            placeholder_text(reason),
            f64::from(surface.width) / 2.0,
            f64::from(surface.height) / 2.0,
            style.placeholder_font_size_px,
            style.placeholder_color,
            TextHAlign::Center,
        ),
    );
    frame
}

/// Pixel width of the hover tooltip box for `text`.
pub(super) fn estimate_tooltip_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * TOOLTIP_GLYPH_WIDTH_RATIO
        + 2.0 * TOOLTIP_TEXT_INSET_PX
}

/// Tooltip left edge: right of the pointer, kept inside the surface.
pub(super) fn resolve_tooltip_x(pointer_x: f64, tooltip_width: f64, surface_width: f64) -> f64 {
    (pointer_x + TOOLTIP_POINTER_GAP_PX)
        .max(TOOLTIP_EDGE_MARGIN_PX)
        .min(surface_width - tooltip_width - TOOLTIP_EDGE_MARGIN_PX)
}

impl<R: Renderer> LightCurveViewer<R> {
    /// Computes the draw commands for the current state without touching the
    /// renderer.
    ///
    /// Paint order: segments, curves, candidate markers, axes, hover. Bad
    /// series data never fails here; it yields a `NoData` frame with a
    /// placeholder label instead.
    pub fn build_frame(&self) -> ViewerResult<RenderFrame> {
        let surface = self.config.viewport.ensure_valid()?;
        let primary = self.primary_curve();

        if let Some(reason) = no_data_reason(primary.health()) {
            trace!(?reason, "primary curve unusable");
            return Ok(placeholder_frame(surface, reason, &self.style));
        }
        let Some(range) = self.visible_range() else {
            return Ok(placeholder_frame(
                surface,
                NoDataReason::MalformedSeries,
                &self.style,
            ));
        };

        let visible = points_in_time_window(primary, range);
        let Ok(transform) = PlotTransform::fit(self.plot_area(), range, &visible) else {
            trace!(lo = range.lo, hi = range.hi, "no samples in view range");
            return Ok(placeholder_frame(
                surface,
                NoDataReason::EmptyWindow,
                &self.style,
            ));
        };

        let mut frame = RenderFrame::new(surface);
        self.push_segment_commands(&mut frame, transform);
        self.push_curve_commands(&mut frame, transform);
        self.push_candidate_commands(&mut frame, transform);
        push_axis_commands(&mut frame, transform, surface, &self.style);
        self.push_hover_commands(&mut frame, transform);

        trace!(
            commands = frame.commands.len(),
            visible_samples = visible.len(),
            lo = range.lo,
            hi = range.hi,
            "frame built"
        );
        Ok(frame)
    }

    /// Curve whose time grid candidate markers snap to: whatever line is
    /// drawn for the primary curve.
    #[must_use]
    pub fn marker_grid_curve(&self) -> CurveKind {
        match self.state.view_mode() {
            CurveKind::Raw => CurveKind::Raw,
            CurveKind::Processed | CurveKind::Binned => {
                if self.state.visibility().binned {
                    CurveKind::Binned
                } else {
                    CurveKind::Processed
                }
            }
        }
    }

    fn push_segment_commands(&self, frame: &mut RenderFrame, transform: PlotTransform) {
        let area = transform.area();
        let range = transform.range();
        let style = &self.style;
        for segment in self.effective_segments() {
            if !segment.start.is_finite()
                || !segment.end.is_finite()
                || !range.overlaps(segment.start, segment.end)
            {
                continue;
            }
            let x1 = transform.time_to_x(segment.start.max(range.lo));
            let x2 = transform.time_to_x(segment.end.min(range.hi));
            for x in [x1, x2] {
                frame.push_line(
                    DrawLayer::Segments,
                    LinePrimitive::new(
                        x,
                        area.top,
                        x,
                        area.bottom(),
                        style.segment_line_width,
                        style.segment_line_color,
                    ),
                );
            }

            let label_y = area.top + SEGMENT_LABEL_Y_OFFSET_PX;
            let min_label_x = area.left + SEGMENT_LABEL_INSET_PX;
            for (text, x) in [
                ("start", (x1 + SEGMENT_LABEL_INSET_PX).max(min_label_x)),
                ("end", (x2 - SEGMENT_END_LABEL_BACKOFF_PX).max(min_label_x)),
            ] {
                frame.push_text(
                    DrawLayer::Segments,
                    TextPrimitive::new(
                        text,
                        x,
                        label_y,
                        style.segment_label_font_size_px,
                        style.segment_label_color,
                        TextHAlign::Left,
                    ),
                );
            }
        }
    }

    fn push_curve_commands(&self, frame: &mut RenderFrame, transform: PlotTransform) {
        let visibility = self.state.visibility();
        let range = transform.range();
        let style = &self.style;
        for kind in [CurveKind::Raw, CurveKind::Processed, CurveKind::Binned] {
            if !visibility.shows(kind) {
                continue;
            }
            let points: Vec<(f64, f64)> = points_in_time_window(self.store.curve(kind), range)
                .into_iter()
                .map(|point| (transform.time_to_x(point.time), transform.flux_to_y(point.flux)))
                .collect();
            if points.is_empty() {
                continue;
            }
            let polyline = match kind {
                CurveKind::Raw => {
                    PolylinePrimitive::new(points, style.raw_line_width, style.raw_curve_color())
                }
                CurveKind::Processed => {
                    PolylinePrimitive::new(points, style.processed_line_width, style.curve_color)
                }
                CurveKind::Binned => {
                    PolylinePrimitive::new(points, style.binned_line_width, style.binned_color)
                        .with_dash(&style.binned_dash)
                }
            };
            frame.push_polyline(DrawLayer::Series, polyline);
        }
    }

    fn push_candidate_commands(&self, frame: &mut RenderFrame, transform: PlotTransform) {
        if self.candidates.is_empty() {
            return;
        }
        let grid: Vec<f64> = self
            .store
            .curve(self.marker_grid_curve())
            .finite_points()
            .map(|point| point.time)
            .collect();
        let geometry = self.config.markers;
        let markers = place_candidate_markers(
            &self.candidates,
            &grid,
            transform,
            transform.range(),
            self.state.selected_candidate(),
            geometry.stroke_width_px,
            self.config.device_pixel_ratio,
        );

        let top = transform.area().top;
        let style = &self.style;
        for marker in markers {
            let (line_color, dot_color) = if marker.selected {
                (
                    style.selected_candidate_line_color,
                    style.selected_candidate_dot_color,
                )
            } else {
                (style.candidate_line_color, style.candidate_dot_color)
            };
            let x = marker.x;
            frame.push_line(
                DrawLayer::Candidates,
                LinePrimitive::new(
                    x,
                    top + geometry.tick_top_offset_px,
                    x,
                    top + geometry.tick_bottom_offset_px,
                    geometry.stroke_width_px,
                    line_color,
                ),
            );
            frame.push_circle(
                DrawLayer::Candidates,
                CirclePrimitive::new(
                    x,
                    top + geometry.tick_top_offset_px,
                    geometry.dot_radius_px,
                    dot_color,
                ),
            );
            frame.push_text(
                DrawLayer::Candidates,
                TextPrimitive::new(
                    format!("#{}", marker.rank + 1),
                    x + geometry.label_offset_x_px,
                    top + geometry.rank_label_offset_y_px,
                    style.candidate_rank_font_size_px,
                    style.candidate_rank_label_color,
                    TextHAlign::Left,
                ),
            );
            frame.push_text(
                DrawLayer::Candidates,
                TextPrimitive::new(
                    format!("{:.3}", marker.candidate.depth),
                    x + geometry.label_offset_x_px,
                    top + geometry.depth_label_offset_y_px,
                    style.candidate_depth_font_size_px,
                    style.candidate_depth_label_color,
                    TextHAlign::Left,
                ),
            );
        }
    }

    fn push_hover_commands(&self, frame: &mut RenderFrame, transform: PlotTransform) {
        let Some(hover) = self.state.interaction().hover() else {
            return;
        };
        let range = transform.range();
        if !range.contains(hover.time) {
            return;
        }
        let area = transform.area();
        let style = &self.style;
        let x = transform.time_to_x(hover.time);
        let y = transform.flux_to_y(hover.flux);

        frame.push_line(
            DrawLayer::Hover,
            LinePrimitive::new(
                x,
                area.top,
                x,
                area.bottom(),
                style.crosshair_line_width,
                style.crosshair_color,
            ),
        );
        frame.push_line(
            DrawLayer::Hover,
            LinePrimitive::new(
                area.left,
                y,
                area.right(),
                y,
                style.crosshair_line_width,
                style.crosshair_color,
            ),
        );

        let text = format!("T {:.3}, F {:.2}", hover.time, hover.flux);
        let width = estimate_tooltip_width(&text, style.tooltip_font_size_px);
        let box_x = resolve_tooltip_x(x, width, f64::from(frame.viewport.width));
        let box_y = y - TOOLTIP_RISE_PX;
        frame.push_rect(
            DrawLayer::Hover,
            RectPrimitive::new(box_x, box_y, width, TOOLTIP_HEIGHT_PX, style.tooltip_fill_color)
                .with_corner_radius(style.tooltip_corner_radius_px),
        );
        frame.push_text(
            DrawLayer::Hover,
            TextPrimitive::new(
                text,
                box_x + TOOLTIP_TEXT_INSET_PX,
                box_y + TOOLTIP_HEIGHT_PX / 2.0,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Left,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{estimate_tooltip_width, no_data_reason, placeholder_text, resolve_tooltip_x};
    use crate::core::SeriesHealth;
    use crate::render::NoDataReason;

    #[test]
    fn tooltip_width_tracks_text_length() {
        let width = estimate_tooltip_width("abcdef", 12.0);
        assert!((width - 54.0).abs() <= 1e-9);
    }

    #[test]
    fn tooltip_stays_inside_surface() {
        assert_eq!(resolve_tooltip_x(100.0, 80.0, 400.0), 108.0);
        assert_eq!(resolve_tooltip_x(390.0, 80.0, 400.0), 312.0);
        assert_eq!(resolve_tooltip_x(-20.0, 80.0, 400.0), 8.0);
    }

    #[test]
    fn placeholder_wording_depends_on_reason() {
        assert_eq!(no_data_reason(SeriesHealth::Usable), None);
        let empty = no_data_reason(SeriesHealth::Empty).expect("reason");
        assert_eq!(placeholder_text(empty), "No data");
        assert_eq!(
            placeholder_text(NoDataReason::EmptyWindow),
            "No data in current range"
        );
    }
}
