use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Series, SeriesStore};
use crate::error::ViewerResult;
use crate::render::Renderer;

use super::{LightCurveViewer, RenderStyle, ViewState, ViewerConfig};

impl<R: Renderer> LightCurveViewer<R> {
    /// Creates a viewer with empty curves. Every nested config is validated.
    pub fn new(renderer: R, config: ViewerConfig) -> ViewerResult<Self> {
        let config = config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            bin_target = config.bin_target_points,
            "creating light-curve viewer"
        );

        Ok(Self {
            renderer,
            config,
            store: SeriesStore::new(Series::default(), Series::default(), config.bin_target_points),
            state: ViewState::default(),
            external_candidates: Vec::new(),
            local_candidates: Vec::new(),
            candidates: Vec::new(),
            segments: None,
            style: RenderStyle::default(),
            observers: IndexMap::new(),
            last_diagnostics: None,
        })
    }

    /// Convenience constructor that loads both curves right away.
    pub fn with_curves(
        renderer: R,
        config: ViewerConfig,
        raw: Series,
        processed: Series,
    ) -> ViewerResult<Self> {
        let mut viewer = Self::new(renderer, config)?;
        viewer.set_curves(raw, processed);
        Ok(viewer)
    }
}
