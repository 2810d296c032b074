//! Host-facing viewer facade.
//!
//! `LightCurveViewer` is split across controller files by concern: data
//! loading, candidate detection, selection, pointer input, frame building,
//! observers and snapshots. Pure resolvers used by the controllers live next
//! to them with their own unit tests.

mod axis_ticks;
mod data_controller;
mod detection_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod navigation_resolver;
mod observer_dispatch;
mod observer_registry;
mod overview_frame_builder;
mod render_frame_builder;
mod render_style;
mod selection_controller;
mod view_state;

pub use engine::LightCurveViewer;
pub use engine_config::{NavigationConfig, ViewerConfig};
pub use engine_snapshot::ViewerSnapshot;
pub use json_contract::{VIEWER_SNAPSHOT_JSON_SCHEMA_V1, ViewerSnapshotJsonContractV1};
pub use render_style::RenderStyle;
pub use view_state::ViewState;
