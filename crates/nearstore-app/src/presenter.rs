//! One-way seam to the map rendering adapter.
//!
//! The adapter receives a [`ViewSnapshot`] and reports nothing back. Tile
//! rendering, popup markup, and the decorative boundary overlay live
//! entirely on the adapter's side; an overlay failure never reaches the
//! resolution engine.

use nearstore_core::{Coordinate, StoreLocation};

use crate::view_state::ViewState;
use crate::viewport::{clamp_center, clamp_zoom};

/// Everything the map adapter needs to draw one frame of the locator.
///
/// Markers are split into two z-ordered groups: `coming_soon` renders
/// beneath `open`, so announced-but-unopened stores never cover live ones.
#[derive(Debug)]
pub struct ViewSnapshot<'a> {
    pub center: Coordinate,
    pub zoom: u8,
    /// When set, the adapter brings this store's marker into view and opens
    /// its detail popup.
    pub selected_store: Option<u32>,
    pub open: Vec<&'a StoreLocation>,
    pub coming_soon: Vec<&'a StoreLocation>,
}

impl<'a> ViewSnapshot<'a> {
    /// Build a snapshot from the current view state and the static dataset,
    /// clamping the requested view to what the map is allowed to show.
    #[must_use]
    pub fn compose(view: &ViewState, stores: &'a [StoreLocation]) -> Self {
        let (coming_soon, open): (Vec<&StoreLocation>, Vec<&StoreLocation>) =
            stores.iter().partition(|s| s.coming_soon);
        Self {
            center: clamp_center(view.center),
            zoom: clamp_zoom(view.zoom),
            selected_store: view.selected_store,
            open,
            coming_soon,
        }
    }
}

/// Render target for view snapshots. One-way: implementations report
/// nothing back to the controller.
pub trait MapPresenter {
    fn present(&mut self, view: &ViewSnapshot<'_>);
}

/// Presenter that logs each view change; the adapter used by the CLI.
#[derive(Debug, Default)]
pub struct TracingPresenter;

impl MapPresenter for TracingPresenter {
    fn present(&mut self, view: &ViewSnapshot<'_>) {
        tracing::info!(
            lat = view.center.latitude,
            lng = view.center.longitude,
            zoom = view.zoom,
            selected_store = view.selected_store,
            open_markers = view.open.len(),
            coming_soon_markers = view.coming_soon.len(),
            "map view updated"
        );
    }
}
