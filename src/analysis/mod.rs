//! Transit-candidate detection and reconciliation.
//!
//! Everything here is a pure function of its inputs and safe to run off the
//! UI thread.

pub mod candidate;
pub mod detector;
pub mod reconcile;

pub use candidate::TransitCandidate;
pub use detector::{
    DetectorConfig, DetectorDiagnostics, detect_transit_candidates, detect_with_diagnostics,
    find_separated_peaks, moving_average,
};
pub use reconcile::{ReconcileConfig, reconcile_candidates};
