//! Nearest-store resolution engine: the view-state controller and its seams
//! to the device geolocation capability and the map rendering adapter.

pub mod controller;
pub mod device;
pub mod presenter;
pub mod view_state;
pub mod viewport;

pub use controller::{AddressResolver, Controller, LocateOutcome};
pub use device::{FixedPosition, PositionError, PositionProvider, UnsupportedPlatform};
pub use presenter::{MapPresenter, TracingPresenter, ViewSnapshot};
pub use view_state::{Phase, ViewState};
