use tracing::debug;

use crate::analysis::{
    DetectorConfig, TransitCandidate, detect_with_diagnostics, reconcile_candidates,
};
use crate::error::ViewerResult;
use crate::extensions::ViewerEvent;
use crate::render::Renderer;

use super::LightCurveViewer;

impl<R: Renderer> LightCurveViewer<R> {
    /// Candidates supplied by the host (for example a server-side detector).
    pub fn set_external_candidates(&mut self, candidates: Vec<TransitCandidate>) {
        debug!(count = candidates.len(), "external candidates updated");
        self.external_candidates = candidates;
        self.refresh_candidates();
    }

    /// Runs the local detector over the processed curve, merges its output
    /// into the reconciled list and notifies observers.
    ///
    /// Returns the raw detector output, before reconciliation.
    pub fn run_local_detection(&mut self) -> Vec<TransitCandidate> {
        let (found, diagnostics) =
            detect_with_diagnostics(self.store.processed(), &self.config.detector);
        debug!(
            found = found.len(),
            threshold = diagnostics.map(|d| d.threshold),
            noise_scale = diagnostics.map(|d| d.noise_scale),
            "local detection finished"
        );
        self.last_diagnostics = diagnostics;
        self.local_candidates = found.clone();
        self.refresh_candidates();
        self.emit_event(ViewerEvent::LocalDetectionCompleted {
            candidates: found.clone(),
        });
        found
    }

    /// Drops local detection results, keeping only the external list.
    pub fn clear_local_candidates(&mut self) {
        if self.local_candidates.is_empty() {
            return;
        }
        self.local_candidates.clear();
        self.last_diagnostics = None;
        self.refresh_candidates();
    }

    /// Replaces the detector tuning. Already detected candidates are kept.
    pub fn set_detector_config(&mut self, detector: DetectorConfig) -> ViewerResult<()> {
        self.config = self.config.with_detector(detector).validate()?;
        Ok(())
    }

    /// Rebuilds the reconciled list from both sources.
    ///
    /// A selection that still points into the list re-frames its candidate,
    /// a selection past the end is dropped.
    pub(super) fn refresh_candidates(&mut self) {
        self.candidates = reconcile_candidates(
            &self.external_candidates,
            &self.local_candidates,
            &self.config.reconcile,
        );
        self.state.retain_candidate_selection(self.candidates.len());
        self.emit_event(ViewerEvent::CandidatesChanged {
            count: self.candidates.len(),
        });
        if let Some(index) = self.state.selected_candidate() {
            self.frame_candidate(index);
        }
    }
}
