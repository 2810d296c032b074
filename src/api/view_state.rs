use crate::core::{CurveKind, CurveVisibility, ViewRange};
use crate::interaction::InteractionState;

/// Everything the viewer mutates in response to host calls and pointer input.
///
/// Kept as one record so the clamping and pointer-exclusivity rules are
/// enforced by the transition methods below instead of by scattered flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    view_mode: CurveKind,
    visibility: CurveVisibility,
    view_range: Option<ViewRange>,
    interaction: InteractionState,
    selected_candidate: Option<usize>,
    selected_segment: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CurveVisibility::default())
    }
}

impl ViewState {
    #[must_use]
    pub fn new(visibility: CurveVisibility) -> Self {
        Self {
            view_mode: visibility
                .implied_view_mode()
                .unwrap_or(CurveKind::Processed),
            visibility,
            view_range: None,
            interaction: InteractionState::default(),
            selected_candidate: None,
            selected_segment: None,
        }
    }

    /// Curve that drives the axes, hover lookup and segment synthesis.
    #[must_use]
    pub fn view_mode(&self) -> CurveKind {
        self.view_mode
    }

    #[must_use]
    pub fn visibility(&self) -> CurveVisibility {
        self.visibility
    }

    /// `None` means the full extent is shown.
    #[must_use]
    pub fn view_range(&self) -> Option<ViewRange> {
        self.view_range
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn selected_candidate(&self) -> Option<usize> {
        self.selected_candidate
    }

    #[must_use]
    pub fn selected_segment(&self) -> Option<usize> {
        self.selected_segment
    }

    pub(super) fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    /// Returns `true` when the stored range changed.
    pub(super) fn set_view_range(&mut self, range: Option<ViewRange>) -> bool {
        if self.view_range == range {
            return false;
        }
        self.view_range = range;
        true
    }

    /// Switches the primary curve. Returns `true` on change.
    pub(super) fn set_view_mode(&mut self, mode: CurveKind) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        true
    }

    /// Applies new show flags and returns the re-synced view mode when it
    /// changed.
    pub(super) fn set_visibility(&mut self, visibility: CurveVisibility) -> Option<CurveKind> {
        self.visibility = visibility;
        let mode = visibility.implied_view_mode()?;
        self.set_view_mode(mode).then_some(mode)
    }

    /// Records a candidate selection; an external selection also ends any
    /// drag in progress.
    pub(super) fn select_candidate(&mut self, index: Option<usize>) {
        self.selected_candidate = index;
        if index.is_some() {
            self.interaction.cancel_pan();
        }
    }

    pub(super) fn select_segment(&mut self, index: usize) {
        self.selected_segment = Some(index);
        self.interaction.cancel_pan();
    }

    /// Drops selections that point past the end of a shortened list.
    pub(super) fn retain_candidate_selection(&mut self, candidates_len: usize) {
        if self
            .selected_candidate
            .is_some_and(|index| index >= candidates_len)
        {
            self.selected_candidate = None;
        }
    }

    /// Forgets everything tied to the previous curves.
    pub(super) fn reset_for_new_curves(&mut self) {
        self.view_range = None;
        self.selected_segment = None;
        self.interaction.cancel_pan();
        self.interaction.set_hover(None);
    }
}
