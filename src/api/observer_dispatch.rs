use crate::extensions::{ViewerContext, ViewerEvent};
use crate::render::Renderer;

use super::LightCurveViewer;

impl<R: Renderer> LightCurveViewer<R> {
    #[must_use]
    pub fn observer_context(&self) -> ViewerContext {
        ViewerContext {
            viewport: self.config.viewport,
            view_mode: self.state.view_mode(),
            visibility: self.state.visibility(),
            full_extent: self
                .full_extent()
                .map(|extent| (extent.min(), extent.max())),
            view_range: self.state.view_range(),
            pointer_mode: self.state.interaction().mode(),
            candidates_len: self.candidates.len(),
            selected_candidate: self.state.selected_candidate(),
        }
    }

    /// Delivers `event` to observers in registration order.
    pub(super) fn emit_event(&mut self, event: ViewerEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in self.observers.values_mut() {
            observer.on_event(&event, &context);
        }
    }
}
