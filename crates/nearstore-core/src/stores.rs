//! Store dataset loading and validation.
//!
//! The dataset is a bundled YAML file read once at startup. Records that
//! arrive without usable coordinates are filtered out here so that neither
//! selection nor rendering ever sees them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::ConfigError;

/// A store record as it appears in the dataset file.
///
/// Coordinates are optional at the wire level; [`load_stores`] drops records
/// that lack them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStoreRecord {
    pub id: u32,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    /// Marked for stores announced but not yet open; these render in a
    /// marker group beneath the open stores.
    #[serde(default)]
    pub coming_soon: bool,
    pub image: Option<String>,
}

/// A validated store: coordinates are present and finite.
///
/// Immutable for the process lifetime; never created, mutated, or destroyed
/// at runtime after the startup load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: u32,
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Coordinate,
    pub description: Option<String>,
    pub coming_soon: bool,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StoresFile {
    pub stores: Vec<RawStoreRecord>,
}

/// Load and validate the store dataset from a YAML file.
///
/// Records with missing or non-finite coordinates are skipped with a
/// warning rather than failing the load — a partially dirty dataset must
/// not take the whole locator down.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, if a store
/// name is empty, or if two records share an id.
pub fn load_stores(path: &Path) -> Result<Vec<StoreLocation>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let stores_file: StoresFile =
        serde_yaml::from_str(&content).map_err(ConfigError::StoresFileParse)?;

    validate_and_filter(stores_file.stores)
}

fn validate_and_filter(raw: Vec<RawStoreRecord>) -> Result<Vec<StoreLocation>, ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut stores = Vec::with_capacity(raw.len());

    for record in raw {
        if record.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "store {} has an empty name",
                record.id
            )));
        }

        if !seen_ids.insert(record.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate store id: {}",
                record.id
            )));
        }

        let coordinate = match (record.latitude, record.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Coordinate::new(lat, lng)
            }
            _ => {
                tracing::warn!(
                    store_id = record.id,
                    name = %record.name,
                    "skipping store without usable coordinates"
                );
                continue;
            }
        };

        stores.push(StoreLocation {
            id: record.id,
            name: record.name,
            address: record.address,
            coordinate,
            description: record.description,
            coming_soon: record.coming_soon,
            image: record.image,
        });
    }

    Ok(stores)
}
