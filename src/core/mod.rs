pub mod binning;
pub mod scale;
pub mod segments;
pub mod series;
pub mod stats;
pub mod transform;
pub mod types;
pub mod view_range;
pub mod windowing;

pub use binning::{DEFAULT_BIN_TARGET, bin_block_size, bin_series};
pub use scale::LinearScale;
pub use segments::{Segment, SegmentConfig, synthesize_segments};
pub use series::{CurveKind, CurveVisibility, Series, SeriesHealth, SeriesStore};
pub use stats::{MAD_TO_SIGMA, SCALE_EPSILON, median, robust_scale, sample_std_dev};
pub use transform::PlotTransform;
pub use types::{DataPoint, PlotArea, PlotPadding, Viewport};
pub use view_range::{TimeExtent, ViewRange};
pub use windowing::{flux_bounds, nearest_point, points_in_time_window};
