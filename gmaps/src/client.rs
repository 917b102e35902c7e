//! Forwarding client for the Google Maps web APIs.
//!
//! [`MapsClient`] translates a logical request (geocode, reverse geocode,
//! places autocomplete) into a GET against the provider, injecting the
//! server-side API key, and returns the response body as untyped JSON.
//!
//! The provider body is deliberately kept opaque: provider-level failures
//! such as `ZERO_RESULTS` or `REQUEST_DENIED` arrive inside a 2xx body and
//! pass through to the caller unchanged. Only a non-2xx HTTP status, a
//! missing key, or an unparseable body produce an error.
//!
//! ```ignore
//! use gmaps::MapsClientBuilder;
//!
//! let client = MapsClientBuilder::new()
//!     .api_key("SECRET")
//!     .timeout_secs(5)
//!     .build()?;
//!
//! let json = client.geocode("Avenida Paulista", Some("pt-BR")).await?;
//! println!("{}", json["status"]);
//! ```

use std::time::Duration;

use serde_json::Value;

use crate::error::{MapsError, Result};

/// Default base URL for the Google Maps web APIs.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default timeout for outbound requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Builder for [`MapsClient`].
///
/// The API key is optional at build time: per-request validation happens at
/// first use, so a service can start without a key and surface a
/// configuration error only when an operation is attempted.
#[derive(Debug, Clone, Default)]
pub struct MapsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl MapsClientBuilder {
    /// Create a builder with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from environment variables.
    ///
    /// Reads `GMAPS_API_KEY`, `GMAPS_BASE_URL` and `GMAPS_TIMEOUT_SECS`.
    /// Unset or unparseable values fall back to defaults; a missing key is
    /// not an error here (it fails on first use instead).
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GMAPS_API_KEY").ok(),
            base_url: std::env::var("GMAPS_BASE_URL").ok(),
            timeout_secs: std::env::var("GMAPS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }

    /// Set the provider API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the provider base URL (mainly for tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the outbound request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the client, constructing the underlying HTTP client with the
    /// configured timeout.
    pub fn build(self) -> Result<MapsClient> {
        let timeout = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(MapsClient {
            http,
            api_key: self.api_key,
            base_url,
        })
    }
}

/// Client that forwards geocoding and autocomplete requests to the
/// Google Maps web APIs.
///
/// Holds an immutable API key and a reusable connection pool; safe to share
/// across request handlers behind an `Arc` with no further synchronization.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl MapsClient {
    /// Geocode a textual address.
    ///
    /// Sends `GET {base}/geocode/json?address=..&key=..[&language=..]` and
    /// returns the provider body as JSON.
    pub async fn geocode(&self, address: &str, language: Option<&str>) -> Result<Value> {
        let key = self.ensure_api_key()?;
        let mut params = vec![
            ("address", address.to_string()),
            ("key", key.to_string()),
        ];
        push_language(&mut params, language);

        tracing::debug!(address, "geocode request");
        self.get_json("geocode/json", &params).await
    }

    /// Reverse geocode a coordinate pair.
    ///
    /// The coordinates are joined as `lat,lng` with a single comma, no
    /// whitespace, and always a fractional part (`-23.0`, not `-23`), and
    /// sent to the same geocode endpoint.
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        language: Option<&str>,
    ) -> Result<Value> {
        let key = self.ensure_api_key()?;
        let mut params = vec![
            ("latlng", format!("{},{}", format_coord(lat), format_coord(lng))),
            ("key", key.to_string()),
        ];
        push_language(&mut params, language);

        tracing::debug!(lat, lng, "reverse geocode request");
        self.get_json("geocode/json", &params).await
    }

    /// Fetch place autocomplete predictions for an input string.
    pub async fn places_autocomplete(&self, input: &str, language: Option<&str>) -> Result<Value> {
        let key = self.ensure_api_key()?;
        let mut params = vec![
            ("input", input.to_string()),
            ("key", key.to_string()),
        ];
        push_language(&mut params, language);

        tracing::debug!(input, "places autocomplete request");
        self.get_json("place/autocomplete/json", &params).await
    }

    /// The configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API key is configured and non-blank.
    pub fn has_api_key(&self) -> bool {
        self.ensure_api_key().is_ok()
    }

    /// Precondition check: the API key must be configured and non-blank
    /// before any query is built or network call made.
    fn ensure_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(MapsError::MissingApiKey),
        }
    }

    /// Issue the GET and parse the body as JSON.
    ///
    /// An empty or whitespace-only body is treated as `{}`. A non-2xx
    /// status becomes a transport error before the body is read.
    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&body).map_err(|source| MapsError::InvalidJson { source })
    }
}

/// Render a coordinate for the `latlng` query value.
///
/// Integral values keep an explicit fractional part (`-23.0`), matching
/// the rendering the provider has always been sent.
fn format_coord(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Append `language` to the query only when supplied and non-blank;
/// a blank value is omitted entirely rather than sent as an empty string.
fn push_language(params: &mut Vec<(&str, String)>, language: Option<&str>) {
    if let Some(lang) = language {
        if !lang.trim().is_empty() {
            params.push(("language", lang.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_language_included_when_present() {
        let mut params = vec![("address", "X".to_string())];
        push_language(&mut params, Some("pt-BR"));
        assert_eq!(params.last().unwrap(), &("language", "pt-BR".to_string()));
    }

    #[test]
    fn test_push_language_omitted_when_blank_or_absent() {
        let mut params = vec![("address", "X".to_string())];
        push_language(&mut params, None);
        push_language(&mut params, Some(""));
        push_language(&mut params, Some("   "));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let client = MapsClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = MapsClientBuilder::new()
            .api_key("k")
            .base_url("http://localhost:9999/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert!(client.has_api_key());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let client = MapsClientBuilder::new().api_key("   ").build().unwrap();
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_format_coord_keeps_fractional_part() {
        assert_eq!(format_coord(-23.0), "-23.0");
        assert_eq!(format_coord(-46.0), "-46.0");
        assert_eq!(format_coord(0.0), "0.0");
        assert_eq!(format_coord(-23.5505), "-23.5505");
    }

    #[test]
    fn test_latlng_join_has_no_whitespace() {
        let (lat, lng) = (-23.5505_f64, -46.6333_f64);
        assert_eq!(
            format!("{},{}", format_coord(lat), format_coord(lng)),
            "-23.5505,-46.6333"
        );
    }
}
