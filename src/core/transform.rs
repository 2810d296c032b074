use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, PlotArea};
use crate::core::view_range::ViewRange;
use crate::core::windowing::flux_bounds;
use crate::error::{ViewerError, ViewerResult};

/// Relative half-span substituted when every visible flux value is equal.
const FLAT_FLUX_HALF_SPAN_RATIO: f64 = 1e-6;
/// Absolute floor for the substituted half-span (covers flux == 0).
const FLAT_FLUX_HALF_SPAN_MIN: f64 = 1e-9;

/// Data-to-pixel mapping for one frame.
///
/// X is linear over the visible time window; Y is linear over the flux range
/// observed inside that window, so the vertical scale follows the zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    area: PlotArea,
    range: ViewRange,
    x: LinearScale,
    y: LinearScale,
    flux_min: f64,
    flux_max: f64,
}

impl PlotTransform {
    /// Builds the transform from the samples visible in `range`.
    ///
    /// Fails only when `visible` is empty or `range` is collapsed; callers turn
    /// that into the "no data" frame.
    pub fn fit(area: PlotArea, range: ViewRange, visible: &[DataPoint]) -> ViewerResult<Self> {
        let (lo, hi) = flux_bounds(visible).ok_or_else(|| {
            ViewerError::InvalidData("no visible samples to fit flux axis".to_owned())
        })?;
        Self::with_flux_bounds(area, range, lo, hi)
    }

    pub fn with_flux_bounds(
        area: PlotArea,
        range: ViewRange,
        flux_min: f64,
        flux_max: f64,
    ) -> ViewerResult<Self> {
        let (flux_min, flux_max) = widen_flat_span(flux_min, flux_max);
        let x = LinearScale::new(range.lo, range.hi, area.left, area.right())?;
        let y = LinearScale::new(flux_min, flux_max, area.bottom(), area.top)?;
        Ok(Self {
            area,
            range,
            x,
            y,
            flux_min,
            flux_max,
        })
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn range(self) -> ViewRange {
        self.range
    }

    #[must_use]
    pub fn flux_bounds(self) -> (f64, f64) {
        (self.flux_min, self.flux_max)
    }

    #[must_use]
    pub fn time_to_x(self, time: f64) -> f64 {
        self.x.to_pixel(time)
    }

    #[must_use]
    pub fn x_to_time(self, x: f64) -> f64 {
        self.x.to_domain(x)
    }

    #[must_use]
    pub fn flux_to_y(self, flux: f64) -> f64 {
        self.y.to_pixel(flux)
    }

    #[must_use]
    pub fn y_to_flux(self, y: f64) -> f64 {
        self.y.to_domain(y)
    }
}

fn widen_flat_span(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo > 0.0 {
        return (lo, hi);
    }
    let half = (lo.abs() * FLAT_FLUX_HALF_SPAN_RATIO).max(FLAT_FLUX_HALF_SPAN_MIN);
    (lo - half, hi + half)
}
