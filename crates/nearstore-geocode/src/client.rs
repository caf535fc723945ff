//! HTTP client for the Nominatim geocoding service.
//!
//! Wraps `reqwest` with typed errors, country scoping, and single-result
//! lookups. Zero matches is a normal outcome (`Ok(None)`), never an error.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodedPlace, NominatimPlace};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// Client for the Nominatim `search` endpoint.
///
/// Use [`GeocodeClient::new`] for the public service or
/// [`GeocodeClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
    country_codes: String,
}

impl GeocodeClient {
    /// Creates a client pointed at the public Nominatim endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        country_codes: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        Self::with_base_url(country_codes, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        country_codes: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // the `search` path segment appends rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            country_codes: country_codes.to_owned(),
        })
    }

    /// Resolve a free-text address to its single best match.
    ///
    /// Requests exactly one ranked result (`limit=1`) scoped to the
    /// configured country codes and takes the first element; there is no
    /// disambiguation step. `query` must be nonempty after trimming —
    /// callers guard that before reaching the network.
    ///
    /// Returns `Ok(None)` when the service finds no match.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::HttpStatus`] on a non-2xx response.
    /// - [`GeocodeError::Deserialize`] if the body does not match the
    ///   expected shape (including unparseable lat/lon strings).
    pub async fn search_one(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
        let url = self.build_search_url(query)?;

        tracing::debug!(query, "geocoding address");
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        // Decode from raw bytes so every malformed body, syntactically
        // invalid JSON included, lands in the Deserialize variant with the
        // query context attached.
        let body = response.bytes().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_slice(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let Some(first) = places.into_iter().next() else {
            tracing::debug!(query, "geocoder returned no matches");
            return Ok(None);
        };

        tracing::debug!(
            query,
            display_name = %first.display_name,
            lat = first.lat,
            lon = first.lon,
            "geocoder match"
        );
        Ok(Some(first.into()))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_search_url(&self, query: &str) -> Result<Url, GeocodeError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query)
            .append_pair("countrycodes", &self.country_codes)
            .append_pair("limit", "1");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeocodeClient {
        GeocodeClient::new("us", 10, "nearstore/0.1 (test)").unwrap()
    }

    #[test]
    fn search_url_carries_all_parameters() {
        let url = client().build_search_url("123 Main St, Columbia SC").unwrap();
        let s = url.to_string();
        assert!(s.starts_with("https://nominatim.openstreetmap.org/search?"));
        assert!(s.contains("format=json"));
        assert!(s.contains("countrycodes=us"));
        assert!(s.contains("limit=1"));
        assert!(s.contains("q=123+Main+St%2C+Columbia+SC"));
    }

    #[test]
    fn base_url_is_normalised_to_one_trailing_slash() {
        let c = GeocodeClient::with_base_url("us", 10, "ua", "http://localhost:9000//").unwrap();
        let url = c.build_search_url("x").unwrap();
        assert!(url.to_string().starts_with("http://localhost:9000/search?"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = GeocodeClient::with_base_url("us", 10, "ua", "not a url");
        assert!(matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })));
    }
}
