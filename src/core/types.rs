use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ViewerResult<Self> {
        if !self.is_valid() {
            return Err(ViewerError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// One `(time, flux)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,
    pub flux: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: f64, flux: f64) -> Self {
        Self { time, flux }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.time.is_finite() && self.flux.is_finite()
    }
}

/// Space reserved around the plot for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 12.0,
            top: 18.0,
            bottom: 30.0,
        }
    }
}

impl PlotPadding {
    pub fn validate(self) -> ViewerResult<Self> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::InvalidData(format!(
                    "plot padding `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Padded drawing rectangle inside a surface.
///
/// Width and height never drop below one pixel so scale divisions stay finite
/// even on surfaces smaller than the padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_surface(viewport: Viewport, padding: PlotPadding) -> Self {
        let surface_w = f64::from(viewport.width.max(1));
        let surface_h = f64::from(viewport.height.max(1));
        Self {
            left: padding.left,
            top: padding.top,
            width: (surface_w - padding.left - padding.right).max(1.0),
            height: (surface_h - padding.top - padding.bottom).max(1.0),
        }
    }

    /// Whole surface, no padding. Used by the overview strip.
    #[must_use]
    pub fn full_surface(viewport: Viewport) -> Self {
        Self::from_surface(
            viewport,
            PlotPadding {
                left: 0.0,
                right: 0.0,
                top: 0.0,
                bottom: 0.0,
            },
        )
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Horizontal position of `x` as a fraction of the plot width.
    #[must_use]
    pub fn x_fraction(self, x: f64) -> f64 {
        (x - self.left) / self.width
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        (0.0..=1.0).contains(&self.x_fraction(x))
    }
}
