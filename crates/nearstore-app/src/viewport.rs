//! Viewport constants and clamping shared with the map adapter.
//!
//! The adapter enforces the bounding box and zoom limits on its side; these
//! helpers keep the controller and any headless presenter from requesting
//! views the adapter would reject.

use nearstore_core::Coordinate;

/// Continental-US viewing bounds the map is clamped to.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// CONUS bounding box.
pub const MAP_BOUNDS: Bounds = Bounds {
    min_lat: 24.4,
    max_lat: 49.4,
    min_lng: -125.0,
    max_lng: -66.9,
};

pub const MIN_ZOOM: u8 = 4;
pub const MAX_ZOOM: u8 = 18;

/// Wide continental view shown at startup.
pub const DEFAULT_ZOOM: u8 = 4;

/// Close-in level applied when a store is selected.
pub const FOCUS_ZOOM: u8 = 15;

/// Geographic center of the contiguous US, the startup map center.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 39.828_3,
    longitude: -98.579_5,
};

#[must_use]
pub fn clamp_zoom(zoom: u8) -> u8 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

#[must_use]
pub fn clamp_center(center: Coordinate) -> Coordinate {
    Coordinate {
        latitude: center.latitude.clamp(MAP_BOUNDS.min_lat, MAP_BOUNDS.max_lat),
        longitude: center.longitude.clamp(MAP_BOUNDS.min_lng, MAP_BOUNDS.max_lng),
    }
}
