//! The single session-wide description of what the map shows.

use nearstore_core::Coordinate;

use crate::viewport::{DEFAULT_CENTER, DEFAULT_ZOOM};

/// Where the locator currently is in its resolution cycle.
///
/// Replaces separate busy/notice flags with one state machine so every
/// transition is explicit and testable without a rendering harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
    PermissionNoticeShown,
}

/// Mutable view description: center, zoom, selection, and phase.
///
/// Created once at startup with a continental default view; mutated only by
/// the controller; torn down with the session. `selected_store`, when set,
/// is a non-owning reference into the static dataset by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub center: Coordinate,
    pub zoom: u8,
    pub selected_store: Option<u32>,
    pub phase: Phase,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            selected_store: None,
            phase: Phase::Idle,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_view_is_the_wide_continental_default() {
        let view = ViewState::new();
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(view.selected_store.is_none());
        assert_eq!(view.phase, Phase::Idle);
        assert!((view.center.latitude - 39.828_3).abs() < 1e-9);
        assert!((view.center.longitude - (-98.579_5)).abs() < 1e-9);
    }
}
