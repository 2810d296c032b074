//! Pointer state machine for the plot surface.
//!
//! `Idle -> Hovering` on enter (or the first move), `Hovering -> Panning` on
//! button press, `Panning -> Idle` on release or leave, anything `-> Idle` on
//! leave. Viewport math lives in the api layer; this module only tracks which
//! state the pointer is in and what it captured.

use serde::{Deserialize, Serialize};

use crate::core::ViewRange;

/// Serializable summary of [`PointerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerMode {
    Idle,
    Hovering,
    Panning,
}

/// What a drag captured when it started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanAnchor {
    pub start_x: f64,
    pub snapshot: ViewRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hovering,
    Panning(PanAnchor),
}

/// Sample under the pointer, shown by the crosshair readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    pub time: f64,
    pub flux: f64,
}

/// Whether the host should let an input event reach the enclosing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPropagation {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: PointerState,
    hover: Option<HoverPoint>,
    cursor: Option<(f64, f64)>,
    inside: bool,
}

impl InteractionState {
    #[must_use]
    pub fn pointer(self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn mode(self) -> PointerMode {
        match self.pointer {
            PointerState::Idle => PointerMode::Idle,
            PointerState::Hovering => PointerMode::Hovering,
            PointerState::Panning(_) => PointerMode::Panning,
        }
    }

    #[must_use]
    pub fn pan_anchor(self) -> Option<PanAnchor> {
        match self.pointer {
            PointerState::Panning(anchor) => Some(anchor),
            _ => None,
        }
    }

    #[must_use]
    pub fn hover(self) -> Option<HoverPoint> {
        self.hover
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Page scrolling should be suppressed while the pointer is over the chart.
    #[must_use]
    pub fn scroll_lock_engaged(self) -> bool {
        self.inside
    }

    pub fn on_pointer_enter(&mut self) {
        self.inside = true;
        if self.pointer == PointerState::Idle {
            self.pointer = PointerState::Hovering;
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.on_pointer_enter();
        self.cursor = Some((x, y));
    }

    /// Only hovering or panning pointers carry a readout.
    pub fn set_hover(&mut self, hover: Option<HoverPoint>) {
        self.hover = match self.pointer {
            PointerState::Idle => None,
            _ => hover,
        };
    }

    /// Starts a drag. Returns `false` when a drag is already in progress.
    pub fn on_pointer_down(&mut self, x: f64, snapshot: ViewRange) -> bool {
        if matches!(self.pointer, PointerState::Panning(_)) {
            return false;
        }
        self.inside = true;
        self.pointer = PointerState::Panning(PanAnchor {
            start_x: x,
            snapshot,
        });
        true
    }

    /// Ends a drag. Returns `true` when a drag was in progress.
    pub fn on_pointer_up(&mut self) -> bool {
        if !matches!(self.pointer, PointerState::Panning(_)) {
            return false;
        }
        self.pointer = PointerState::Idle;
        self.hover = None;
        true
    }

    /// Returns `true` when the leave interrupted a drag.
    pub fn on_pointer_leave(&mut self) -> bool {
        let was_panning = matches!(self.pointer, PointerState::Panning(_));
        self.pointer = PointerState::Idle;
        self.hover = None;
        self.cursor = None;
        self.inside = false;
        was_panning
    }

    /// Drops an in-progress drag in favor of an externally imposed viewport.
    pub fn cancel_pan(&mut self) -> bool {
        if !matches!(self.pointer, PointerState::Panning(_)) {
            return false;
        }
        self.pointer = PointerState::Hovering;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverPoint, InteractionState, PointerMode};
    use crate::core::ViewRange;

    #[test]
    fn full_drag_cycle() {
        let mut state = InteractionState::default();
        assert_eq!(state.mode(), PointerMode::Idle);

        state.on_pointer_enter();
        assert_eq!(state.mode(), PointerMode::Hovering);
        assert!(state.scroll_lock_engaged());

        assert!(state.on_pointer_down(10.0, ViewRange::new(0.0, 1.0)));
        assert_eq!(state.mode(), PointerMode::Panning);
        assert!(!state.on_pointer_down(20.0, ViewRange::new(5.0, 6.0)));
        assert_eq!(state.pan_anchor().map(|a| a.start_x), Some(10.0));

        assert!(state.on_pointer_up());
        assert_eq!(state.mode(), PointerMode::Idle);
        assert!(state.scroll_lock_engaged());

        state.on_pointer_move(3.0, 4.0);
        assert_eq!(state.mode(), PointerMode::Hovering);
        state.on_pointer_leave();
        assert_eq!(state.mode(), PointerMode::Idle);
        assert!(!state.scroll_lock_engaged());
    }

    #[test]
    fn idle_pointer_never_keeps_a_hover_readout() {
        let mut state = InteractionState::default();
        state.set_hover(Some(HoverPoint {
            time: 1.0,
            flux: 2.0,
        }));
        assert_eq!(state.hover(), None);
    }

    #[test]
    fn cancel_pan_returns_to_hovering() {
        let mut state = InteractionState::default();
        state.on_pointer_down(0.0, ViewRange::new(0.0, 1.0));
        assert!(state.cancel_pan());
        assert_eq!(state.mode(), PointerMode::Hovering);
        assert!(!state.cancel_pan());
    }
}
