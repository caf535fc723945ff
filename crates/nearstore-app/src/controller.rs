//! View-state controller: the transition table of the locator.
//!
//! Both resolution paths hand the controller a raw coordinate, and the
//! controller always re-resolves it to the nearest known store. A device or
//! geocoded coordinate is never accepted as the map center directly — it is
//! only a lookup key into the dataset.

use nearstore_core::{nearest_store, Coordinate, StoreLocation};
use nearstore_geocode::{GeocodeClient, GeocodeError};

use crate::device::{PositionError, PositionProvider};
use crate::presenter::ViewSnapshot;
use crate::view_state::{Phase, ViewState};
use crate::viewport::FOCUS_ZOOM;

/// Seam over the address geocoder so the controller can be driven by test
/// doubles without a network.
#[allow(async_fn_in_trait)] // single-threaded cooperative driver, no Send bound needed
pub trait AddressResolver {
    type Error: std::fmt::Display;

    /// Resolve a nonempty, trimmed query to its best-match coordinate, or
    /// `None` when the service has no match.
    async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, Self::Error>;
}

impl AddressResolver for GeocodeClient {
    type Error = GeocodeError;

    async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, Self::Error> {
        Ok(self.search_one(query).await?.map(|place| place.coordinate))
    }
}

/// Terminal outcome of one user-initiated locate action.
///
/// Every variant leaves the controller out of `Busy`; the presentation
/// layer picks the notice to show from the variant alone. No outcome
/// triggers an automatic retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateOutcome {
    /// The view was centered on the nearest store.
    Centered { store_id: u32, distance_miles: f64 },
    /// Search query was empty after trimming; nothing was attempted.
    EmptyQuery,
    /// The geocoder had no match for the query (transient notice).
    AddressNotFound,
    /// The geocoder call itself failed (generic notice; detail only logged).
    LookupFailed,
    /// Position access denied or timed out; the persistent instructional
    /// notice is now showing and must be dismissed explicitly.
    PermissionNoticeShown,
    /// The host has no geolocation capability (informational only).
    Unsupported,
    /// The store dataset is empty; nothing to select.
    NoStores,
    /// A resolution is already in flight or the permission notice is up.
    Busy,
}

/// Owns the [`ViewState`] and the immutable store list, and applies every
/// transition. Single logical thread of control: operations interleave only
/// at the two resolver await points, so no synchronization is needed.
pub struct Controller {
    stores: Vec<StoreLocation>,
    view: ViewState,
}

impl Controller {
    #[must_use]
    pub fn new(stores: Vec<StoreLocation>) -> Self {
        Self {
            stores,
            view: ViewState::new(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn stores(&self) -> &[StoreLocation] {
        &self.stores
    }

    /// Current frame for a map presenter.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        ViewSnapshot::compose(&self.view, &self.stores)
    }

    /// "Use my location": one-shot device position fix, then center on the
    /// nearest store.
    ///
    /// A host without the capability short-circuits before entering `Busy`.
    pub async fn locate_by_device<P: PositionProvider>(&mut self, provider: &P) -> LocateOutcome {
        if !provider.is_supported() {
            tracing::info!("geolocation not supported on this host");
            return LocateOutcome::Unsupported;
        }
        if self.view.phase != Phase::Idle {
            return LocateOutcome::Busy;
        }

        self.view.phase = Phase::Busy;
        match provider.current_position().await {
            Ok(position) => self.center_on_nearest(position),
            Err(err @ (PositionError::Denied | PositionError::TimedOut)) => {
                tracing::warn!(error = %err, "device position unavailable");
                self.view.phase = Phase::PermissionNoticeShown;
                LocateOutcome::PermissionNoticeShown
            }
        }
    }

    /// Free-text address search: geocode, then center on the nearest store.
    ///
    /// The query is trimmed first; an empty query is a no-op that never
    /// reaches the network.
    pub async fn locate_by_address<R: AddressResolver>(
        &mut self,
        resolver: &R,
        query: &str,
    ) -> LocateOutcome {
        let query = query.trim();
        if query.is_empty() {
            return LocateOutcome::EmptyQuery;
        }
        if self.view.phase != Phase::Idle {
            return LocateOutcome::Busy;
        }

        self.view.phase = Phase::Busy;
        match resolver.resolve(query).await {
            Ok(Some(coordinate)) => self.center_on_nearest(coordinate),
            Ok(None) => {
                tracing::info!(query, "no geocoder match for address");
                self.view.phase = Phase::Idle;
                LocateOutcome::AddressNotFound
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "address lookup failed");
                self.view.phase = Phase::Idle;
                LocateOutcome::LookupFailed
            }
        }
    }

    /// Explicit user dismissal of the permission notice.
    pub fn dismiss_permission_notice(&mut self) {
        if self.view.phase == Phase::PermissionNoticeShown {
            self.view.phase = Phase::Idle;
        }
    }

    fn center_on_nearest(&mut self, query: Coordinate) -> LocateOutcome {
        let outcome = match nearest_store(query, &self.stores) {
            Some(found) => {
                tracing::info!(
                    store_id = found.store.id,
                    store = %found.store.name,
                    distance_miles = found.distance_miles,
                    "centering on nearest store"
                );
                self.view.center = found.store.coordinate;
                self.view.zoom = FOCUS_ZOOM;
                self.view.selected_store = Some(found.store.id);
                LocateOutcome::Centered {
                    store_id: found.store.id,
                    distance_miles: found.distance_miles,
                }
            }
            None => {
                tracing::warn!("store dataset is empty; nothing to select");
                LocateOutcome::NoStores
            }
        };
        self.view.phase = Phase::Idle;
        outcome
    }
}
