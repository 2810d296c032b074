use tracing::{debug, trace, warn};

use crate::core::{ViewRange, nearest_point, points_in_time_window};
use crate::extensions::ViewerEvent;
use crate::interaction::{EventPropagation, HoverPoint};
use crate::render::Renderer;

use super::LightCurveViewer;
use super::navigation_resolver::{
    resolve_pan_delta_time, resolve_wheel_zoom_factor, resolve_zoom_target,
};

impl<R: Renderer> LightCurveViewer<R> {
    pub fn pointer_enter(&mut self) {
        self.state.interaction_mut().on_pointer_enter();
        trace!("pointer entered plot");
    }

    /// Moves the pointer to surface coordinates `(x, y)`.
    ///
    /// While panning the viewport follows the drag. Inside the plot area the
    /// hover readout tracks the primary-curve sample nearest to the time under
    /// `x`; over the padding it is cleared.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.state.interaction_mut().on_pointer_move(x, y);

        if let Some(anchor) = self.state.interaction().pan_anchor() {
            self.apply_pan(anchor.snapshot, anchor.start_x, x);
        }

        let hover = self.resolve_hover(x);
        self.state.interaction_mut().set_hover(hover);
        self.emit_event(ViewerEvent::PointerMoved { x, y, hover });
    }

    /// Starts a drag, capturing the current viewport (the full extent when
    /// none is set).
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.state.interaction_mut().on_pointer_move(x, y);
        let Some(snapshot) = self.visible_range() else {
            return;
        };
        if self.state.interaction_mut().on_pointer_down(x, snapshot) {
            debug!(x, lo = snapshot.lo, hi = snapshot.hi, "pan started");
            self.emit_event(ViewerEvent::PanStarted);
        }
    }

    pub fn pointer_up(&mut self) {
        if self.state.interaction_mut().on_pointer_up() {
            debug!("pan ended");
            self.emit_event(ViewerEvent::PanEnded);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.state.interaction_mut().on_pointer_leave() {
            debug!("pan interrupted by pointer leave");
            self.emit_event(ViewerEvent::PanEnded);
        }
        self.emit_event(ViewerEvent::PointerLeft);
    }

    /// Zooms around the time under `x`. Positive `delta_y` zooms out.
    ///
    /// Always asks the host to stop propagation so the page does not scroll
    /// while the pointer is over the chart, even when the wheel lands in the
    /// padding and nothing zooms.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> EventPropagation {
        self.state.interaction_mut().on_pointer_move(x, y);

        let area = self.plot_area();
        let fraction = area.x_fraction(x);
        if !area.contains_x(x) {
            trace!(x, "wheel outside plot area");
            return EventPropagation::Stop;
        }
        let (Some(extent), Some(current)) = (self.full_extent(), self.visible_range()) else {
            return EventPropagation::Stop;
        };
        let Some(factor) = resolve_wheel_zoom_factor(delta_y, &self.config.navigation) else {
            return EventPropagation::Stop;
        };

        let target = resolve_zoom_target(
            current,
            fraction,
            factor,
            extent,
            self.config.navigation.min_span_ratio,
        );
        self.apply_view_range(Some(target));

        let hover = self.resolve_hover(x);
        self.state.interaction_mut().set_hover(hover);
        EventPropagation::Stop
    }

    /// Page scrolling should be suppressed while this is `true`.
    #[must_use]
    pub fn scroll_lock_engaged(&self) -> bool {
        self.state.interaction().scroll_lock_engaged()
    }

    fn apply_pan(&mut self, snapshot: ViewRange, start_x: f64, x: f64) {
        let Some(extent) = self.full_extent() else {
            return;
        };
        let delta_time =
            match resolve_pan_delta_time(x - start_x, self.plot_area().width, snapshot.span()) {
                Ok(delta) => delta,
                Err(err) => {
                    warn!(error = %err, "skipping pan step");
                    return;
                }
            };
        let target = extent.clamp_preserving_span(
            snapshot.shifted(delta_time),
            self.config.navigation.min_span_ratio,
        );
        if self.state.view_range().is_none() && target == extent.full_range() {
            return;
        }
        self.apply_view_range(Some(target));
    }

    fn resolve_hover(&self, x: f64) -> Option<HoverPoint> {
        let area = self.plot_area();
        if !area.contains_x(x) {
            return None;
        }
        let range = self.visible_range()?;
        let time = range.lo + area.x_fraction(x) * range.span();
        let visible = points_in_time_window(self.primary_curve(), range);
        nearest_point(&visible, time).map(|point| HoverPoint {
            time: point.time,
            flux: point.flux,
        })
    }
}
