use serde::{Deserialize, Serialize};

use crate::analysis::TransitCandidate;
use crate::core::{PlotTransform, ViewRange};
use crate::error::{ViewerError, ViewerResult};

/// Pixel geometry of a candidate marker, relative to the plot top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateMarkerGeometry {
    pub tick_top_offset_px: f64,
    pub tick_bottom_offset_px: f64,
    pub stroke_width_px: f64,
    pub dot_radius_px: f64,
    pub label_offset_x_px: f64,
    pub rank_label_offset_y_px: f64,
    pub depth_label_offset_y_px: f64,
}

impl Default for CandidateMarkerGeometry {
    fn default() -> Self {
        Self {
            tick_top_offset_px: 6.0,
            tick_bottom_offset_px: 18.0,
            stroke_width_px: 2.0,
            dot_radius_px: 3.2,
            label_offset_x_px: 6.0,
            rank_label_offset_y_px: 10.0,
            depth_label_offset_y_px: 22.0,
        }
    }
}

impl CandidateMarkerGeometry {
    pub fn validate(self) -> ViewerResult<Self> {
        for (name, value) in [
            ("tick_top_offset_px", self.tick_top_offset_px),
            ("tick_bottom_offset_px", self.tick_bottom_offset_px),
            ("stroke_width_px", self.stroke_width_px),
            ("dot_radius_px", self.dot_radius_px),
            ("label_offset_x_px", self.label_offset_x_px),
            ("rank_label_offset_y_px", self.rank_label_offset_y_px),
            ("depth_label_offset_y_px", self.depth_label_offset_y_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "marker geometry `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// A candidate resolved to a horizontal pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedCandidateMarker {
    /// Position in the reconciled list; labels show `rank + 1`.
    pub rank: usize,
    pub candidate: TransitCandidate,
    pub x: f64,
    pub selected: bool,
}

/// Maps `time` to pixels through the sample grid of the curve being drawn.
///
/// The pixel position is interpolated between the two bracketing samples, and
/// times outside the grid pin to its first or last sample, so markers sit on
/// the visible line whatever resolution that line has. An empty grid falls
/// back to the plain time mapping.
#[must_use]
pub fn interpolate_x_on_grid(time: f64, grid: &[f64], to_x: impl Fn(f64) -> f64) -> f64 {
    let (Some(&first), Some(&last)) = (grid.first(), grid.last()) else {
        return to_x(time);
    };
    if time <= first {
        return to_x(first);
    }
    if time >= last {
        return to_x(last);
    }

    let hi = grid.partition_point(|&t| t <= time).min(grid.len() - 1).max(1);
    let (t0, t1) = (grid[hi - 1], grid[hi]);
    let denom = if t1 - t0 == 0.0 { 1e-9 } else { t1 - t0 };
    let frac = (time - t0) / denom;
    let (x0, x1) = (to_x(t0), to_x(t1));
    x0 + (x1 - x0) * frac
}

/// Snaps `x` onto the device pixel grid; odd stroke widths land on pixel
/// centers.
#[must_use]
pub fn align_to_device_pixel(x: f64, stroke_width: f64, device_pixel_ratio: f64) -> f64 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let width = stroke_width.round().max(1.0) as i64;
    let half_pixel = if width % 2 == 1 { 0.5 / dpr } else { 0.0 };
    (x * dpr).round() / dpr + half_pixel
}

/// Resolves every candidate overlapping `range` to a marker position on the
/// displayed curve's time grid.
#[must_use]
pub fn place_candidate_markers(
    candidates: &[TransitCandidate],
    grid: &[f64],
    transform: PlotTransform,
    range: ViewRange,
    selected: Option<usize>,
    stroke_width: f64,
    device_pixel_ratio: f64,
) -> Vec<PlacedCandidateMarker> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            c.center_time.is_finite()
                && range.overlaps(c.start_time.min(c.end_time), c.start_time.max(c.end_time))
        })
        .map(|(rank, candidate)| {
            let x = interpolate_x_on_grid(candidate.center_time, grid, |t| transform.time_to_x(t));
            PlacedCandidateMarker {
                rank,
                candidate: *candidate,
                x: align_to_device_pixel(x, stroke_width, device_pixel_ratio),
                selected: selected == Some(rank),
            }
        })
        .collect()
}
