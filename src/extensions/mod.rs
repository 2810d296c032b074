//! Candidate marker placement and observer hooks.

pub mod markers;
pub mod observers;

pub use markers::{
    CandidateMarkerGeometry, PlacedCandidateMarker, align_to_device_pixel,
    interpolate_x_on_grid, place_candidate_markers,
};
pub use observers::{ViewerContext, ViewerEvent, ViewerObserver};
