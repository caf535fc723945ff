//! Domain core for the nearstore locator: coordinates, great-circle
//! distance, nearest-store selection, the store dataset, and app config.

pub mod app_config;
pub mod config;
pub mod geo;
pub mod nearest;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_miles, Coordinate};
pub use nearest::{nearest_store, NearestMatch};
pub use stores::{load_stores, RawStoreRecord, StoreLocation, StoresFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read stores file {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stores file: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
