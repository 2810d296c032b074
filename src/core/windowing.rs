use ordered_float::OrderedFloat;

use crate::core::series::Series;
use crate::core::types::DataPoint;
use crate::core::view_range::ViewRange;

/// Finite samples whose time falls inside the inclusive window.
#[must_use]
pub fn points_in_time_window(series: &Series, range: ViewRange) -> Vec<DataPoint> {
    series
        .finite_points()
        .filter(|point| range.contains(point.time))
        .collect()
}

/// Sample closest in time to `time`; the earliest wins ties.
#[must_use]
pub fn nearest_point(points: &[DataPoint], time: f64) -> Option<DataPoint> {
    if !time.is_finite() {
        return None;
    }
    points
        .iter()
        .enumerate()
        .min_by_key(|(index, point)| (OrderedFloat((point.time - time).abs()), *index))
        .map(|(_, point)| *point)
}

/// Minimum and maximum flux over `points`.
#[must_use]
pub fn flux_bounds(points: &[DataPoint]) -> Option<(f64, f64)> {
    let first = points.first()?;
    Some(points.iter().fold((first.flux, first.flux), |(lo, hi), p| {
        (lo.min(p.flux), hi.max(p.flux))
    }))
}
