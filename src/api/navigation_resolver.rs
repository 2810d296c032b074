use crate::analysis::TransitCandidate;
use crate::core::{Segment, TimeExtent, ViewRange};
use crate::error::{ViewerError, ViewerResult};

use super::NavigationConfig;

/// Time shift for a drag of `delta_px`. Dragging right moves the window
/// backwards in time.
pub(super) fn resolve_pan_delta_time(
    delta_px: f64,
    plot_width_px: f64,
    visible_span: f64,
) -> ViewerResult<f64> {
    if !plot_width_px.is_finite() || plot_width_px <= 0.0 {
        return Err(ViewerError::InvalidData(
            "pan plot width must be finite and > 0".to_owned(),
        ));
    }
    let delta_time = -(delta_px / plot_width_px) * visible_span;
    if !delta_time.is_finite() {
        return Err(ViewerError::InvalidData(
            "computed pan delta time must be finite".to_owned(),
        ));
    }
    Ok(delta_time)
}

/// Positive `delta_y` zooms out, negative zooms in, zero does nothing.
pub(super) fn resolve_wheel_zoom_factor(delta_y: f64, navigation: &NavigationConfig) -> Option<f64> {
    if !delta_y.is_finite() || delta_y == 0.0 {
        return None;
    }
    if delta_y > 0.0 {
        Some(navigation.zoom_out_factor)
    } else {
        Some(navigation.zoom_in_factor)
    }
}

/// Zooms `current` around the time under `anchor_fraction` (0 = left plot
/// edge, 1 = right) and clamps the result into `extent`.
pub(super) fn resolve_zoom_target(
    current: ViewRange,
    anchor_fraction: f64,
    factor: f64,
    extent: TimeExtent,
    min_span_ratio: f64,
) -> ViewRange {
    let anchor = current.lo + anchor_fraction * current.span();
    extent.clamp(current.zoomed_around(anchor, factor), min_span_ratio)
}

/// Window that frames `candidate` with `pad_ratio * duration` on both sides.
///
/// Zero-duration candidates get `zero_duration_pad_ratio * extent` instead.
/// Returns `None` when the candidate bounds are not finite.
pub(super) fn resolve_candidate_frame(
    candidate: &TransitCandidate,
    extent: TimeExtent,
    pad_ratio: f64,
    zero_duration_pad_ratio: f64,
    min_span_ratio: f64,
) -> Option<ViewRange> {
    let duration = candidate.duration()?;
    let start = candidate.start_time.min(candidate.end_time);
    let end = candidate.start_time.max(candidate.end_time);
    let pad = if duration > 0.0 {
        pad_ratio * duration
    } else {
        zero_duration_pad_ratio * extent.span()
    };
    let framed = ViewRange::new(
        (start - pad).max(extent.min()),
        (end + pad).min(extent.max()),
    );
    Some(extent.clamp(framed, min_span_ratio))
}

pub(super) fn resolve_segment_frame(
    segment: &Segment,
    extent: TimeExtent,
    min_span_ratio: f64,
) -> Option<ViewRange> {
    if !segment.start.is_finite() || !segment.end.is_finite() {
        return None;
    }
    Some(extent.clamp(ViewRange::new(segment.start, segment.end), min_span_ratio))
}
