//! Error types for the gmaps library.

use thiserror::Error;

/// Errors that can occur when forwarding requests to the Google Maps API.
#[derive(Error, Debug)]
pub enum MapsError {
    /// No API key was configured. Checked before any network call is made.
    #[error("Google Maps API key is not configured. Set GMAPS_API_KEY or MapsClientBuilder::api_key")]
    MissingApiKey,

    /// The outbound HTTP call failed (network failure or non-2xx status).
    #[error("request to Google Maps API failed: {0}")]
    Http(reqwest::Error),

    /// The provider returned a body that is not valid JSON.
    #[error("failed to parse response from Google Maps API: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display includes the request URL, whose query string
        // carries the server-side API key. Drop the URL so error messages
        // surfaced to callers never contain the credential.
        MapsError::Http(err.without_url())
    }
}

/// Result type alias using [`MapsError`].
pub type Result<T> = std::result::Result<T, MapsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapsError::MissingApiKey;
        assert!(err.to_string().contains("API key"));
        assert!(err.to_string().contains("GMAPS_API_KEY"));

        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = MapsError::InvalidJson { source: parse_err };
        assert!(err.to_string().contains("parse"));
    }
}
