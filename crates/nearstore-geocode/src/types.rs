//! Wire and domain types for the Nominatim search endpoint.

use nearstore_core::Coordinate;
use serde::{Deserialize, Deserializer};

/// One ranked match from the geocoder, reduced to what the locator needs.
#[derive(Debug, Clone)]
pub struct GeocodedPlace {
    pub coordinate: Coordinate,
    pub display_name: String,
}

/// A place object as Nominatim returns it. `lat`/`lon` arrive as strings
/// and are parsed during deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimPlace {
    #[serde(deserialize_with = "f64_from_string")]
    pub lat: f64,
    #[serde(deserialize_with = "f64_from_string")]
    pub lon: f64,
    pub display_name: String,
}

impl From<NominatimPlace> for GeocodedPlace {
    fn from(place: NominatimPlace) -> Self {
        Self {
            coordinate: Coordinate::new(place.lat, place.lon),
            display_name: place.display_name,
        }
    }
}

fn f64_from_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<f64>().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stringly_typed_coordinates() {
        let place: NominatimPlace = serde_json::from_str(
            r#"{"lat": "39.7817", "lon": "-89.6501", "display_name": "Springfield, IL"}"#,
        )
        .unwrap();
        assert!((place.lat - 39.7817).abs() < 1e-9);
        assert!((place.lon - (-89.6501)).abs() < 1e-9);
    }

    #[test]
    fn rejects_unparseable_coordinates() {
        let result: Result<NominatimPlace, _> = serde_json::from_str(
            r#"{"lat": "north-ish", "lon": "-89.6501", "display_name": "nowhere"}"#,
        );
        assert!(result.is_err());
    }
}
