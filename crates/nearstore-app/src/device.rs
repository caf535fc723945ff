//! Seam over the host platform's one-shot geolocation capability.

use nearstore_core::Coordinate;
use thiserror::Error;

/// Why a supported platform failed to produce a position fix.
///
/// A platform-side timeout is treated exactly like a denial: both end in
/// the permission notice, and neither is retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position access was denied")]
    Denied,
    #[error("position request timed out")]
    TimedOut,
}

/// A source of one-shot device position fixes.
///
/// `is_supported` is checked before any request so a capability-less host
/// never enters a busy state. `current_position` suspends until exactly one
/// terminal outcome; there is no position streaming and no cancellation.
#[allow(async_fn_in_trait)] // single-threaded cooperative driver, no Send bound needed
pub trait PositionProvider {
    fn is_supported(&self) -> bool;

    async fn current_position(&self) -> Result<Coordinate, PositionError>;
}

/// A host with no geolocation capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatform;

impl PositionProvider for UnsupportedPlatform {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        Err(PositionError::Denied)
    }
}

/// A provider that always reports one known coordinate.
///
/// Backs the CLI's `nearest --lat --lng` path and the controller tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

impl PositionProvider for FixedPosition {
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        Ok(self.0)
    }
}
