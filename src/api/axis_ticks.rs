use std::f64::consts::FRAC_PI_2;

use smallvec::SmallVec;

use crate::core::{PlotArea, PlotTransform, Viewport};
use crate::render::{DrawLayer, RenderFrame, TextHAlign, TextPrimitive};

use super::RenderStyle;

const FLUX_TICK_COUNT: usize = 5;
const TIME_TICK_COUNT: usize = 7;
const FLUX_LABEL_GAP_PX: f64 = 6.0;
const TIME_LABEL_BASELINE_FROM_BOTTOM_PX: f64 = 8.0;
const FLUX_TITLE_X_PX: f64 = 14.0;
const FLUX_TITLE: &str = "Flux";

type TickList = SmallVec<[AxisTick; TIME_TICK_COUNT]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct AxisTick {
    pub position_px: f64,
    pub value: f64,
}

/// Evenly spaced flux ticks from the plot top (max flux) to the bottom.
pub(super) fn resolve_flux_ticks(area: PlotArea, flux_min: f64, flux_max: f64) -> TickList {
    let steps = (FLUX_TICK_COUNT - 1) as f64;
    (0..FLUX_TICK_COUNT)
        .map(|i| {
            let ratio = i as f64 / steps;
            AxisTick {
                position_px: area.top + area.height * ratio,
                value: flux_max - (flux_max - flux_min) * ratio,
            }
        })
        .collect()
}

/// Evenly spaced time ticks across the plot width.
pub(super) fn resolve_time_ticks(area: PlotArea, lo: f64, hi: f64) -> TickList {
    let steps = (TIME_TICK_COUNT - 1) as f64;
    (0..TIME_TICK_COUNT)
        .map(|i| {
            let ratio = i as f64 / steps;
            AxisTick {
                position_px: area.left + area.width * ratio,
                value: lo + (hi - lo) * ratio,
            }
        })
        .collect()
}

pub(super) fn format_tick_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Tick labels on both axes plus the rotated flux title.
pub(super) fn push_axis_commands(
    frame: &mut RenderFrame,
    transform: PlotTransform,
    surface: Viewport,
    style: &RenderStyle,
) {
    let area = transform.area();
    let (flux_min, flux_max) = transform.flux_bounds();
    for tick in resolve_flux_ticks(area, flux_min, flux_max) {
        frame.push_text(
            DrawLayer::Axes,
            TextPrimitive::new(
                format_tick_value(tick.value),
                area.left - FLUX_LABEL_GAP_PX,
                tick.position_px,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ),
        );
    }

    let range = transform.range();
    let label_y = f64::from(surface.height) - TIME_LABEL_BASELINE_FROM_BOTTOM_PX;
    for tick in resolve_time_ticks(area, range.lo, range.hi) {
        frame.push_text(
            DrawLayer::Axes,
            TextPrimitive::new(
                format_tick_value(tick.value),
                tick.position_px,
                label_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ),
        );
    }

    frame.push_text(
        DrawLayer::Axes,
        TextPrimitive::new(
            FLUX_TITLE,
            FLUX_TITLE_X_PX,
            f64::from(surface.height) / 2.0,
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Center,
        )
        .rotated(-FRAC_PI_2),
    );
}
