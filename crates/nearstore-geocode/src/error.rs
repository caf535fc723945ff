use thiserror::Error;

/// Errors returned by the geocoding client.
///
/// An empty result set is NOT an error — `search_one` returns `Ok(None)`
/// for a query with no matches. These variants all describe transport or
/// contract failures, which the controller collapses into one generic
/// user-facing "lookup failed" outcome.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client itself could not be constructed.
    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
