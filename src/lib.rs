//! lightcurve-rs: headless light-curve viewer engine.
//!
//! The crate turns two aligned flux series (raw and processed) into
//! backend-agnostic draw commands, keeps pan/zoom/hover state for an
//! interactive plot, and ships a local transit-candidate detector whose
//! results are reconciled with externally supplied candidates.

pub mod analysis;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LightCurveViewer, ViewerConfig};
pub use error::{ViewerError, ViewerResult};
