//! HTTP request handlers for the forwarding façade.
//!
//! Required parameters are extracted as optional strings and validated by
//! hand so every rejection carries the structured error body, including
//! type failures like a non-numeric `lat`. Errors raised by the forwarding
//! client (missing key, parse failure, transport failure) map to 400 with
//! the same body, matching the behavior of the service this replaces.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;

/// Query parameters for the geocode endpoint.
#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    /// Textual address to geocode.
    pub address: Option<String>,
    /// Optional BCP-47 language code (e.g., pt-BR, en).
    pub language: Option<String>,
}

/// Query parameters for the reverse geocode endpoint.
///
/// Coordinates arrive as strings so that a non-numeric value produces the
/// structured 400 body instead of a bare extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ReverseParams {
    /// Latitude in decimal degrees.
    pub lat: Option<String>,
    /// Longitude in decimal degrees.
    pub lng: Option<String>,
    /// Optional BCP-47 language code.
    pub language: Option<String>,
}

/// Query parameters for the places autocomplete endpoint.
#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    /// User input string for place autocomplete.
    pub input: Option<String>,
    /// Optional BCP-47 language code.
    pub language: Option<String>,
}

/// Structured error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Status reason phrase.
    pub error: String,
    /// Human-readable description of what went wrong.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Geocode an address.
///
/// # Query Parameters
///
/// - `address`: textual address, required, non-blank
/// - `language`: optional language code, forwarded only when non-blank
///
/// # Returns
///
/// - `200 OK` with the provider's JSON body on success
/// - `400 Bad Request` on validation, configuration or upstream failure
#[axum::debug_handler]
pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeParams>,
) -> Response {
    let address = match require_non_blank(params.address.as_deref(), "address") {
        Ok(value) => value,
        Err(response) => return response,
    };

    tracing::debug!(address, "geocode query");

    match state.maps.geocode(address, params.language.as_deref()).await {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => forwarding_error(e),
    }
}

/// Reverse geocode a coordinate pair.
///
/// Both `lat` and `lng` are required and must parse as floating point.
#[axum::debug_handler]
pub async fn reverse_geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReverseParams>,
) -> Response {
    let lat = match require_float(params.lat.as_deref(), "lat") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let lng = match require_float(params.lng.as_deref(), "lng") {
        Ok(value) => value,
        Err(response) => return response,
    };

    tracing::debug!(lat, lng, "reverse geocode query");

    match state
        .maps
        .reverse_geocode(lat, lng, params.language.as_deref())
        .await
    {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => forwarding_error(e),
    }
}

/// Fetch place autocomplete predictions.
#[axum::debug_handler]
pub async fn places_autocomplete(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AutocompleteParams>,
) -> Response {
    let input = match require_non_blank(params.input.as_deref(), "input") {
        Ok(value) => value,
        Err(response) => return response,
    };

    tracing::debug!(input, "places autocomplete query");

    match state
        .maps
        .places_autocomplete(input, params.language.as_deref())
        .await
    {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => forwarding_error(e),
    }
}

/// Health check endpoint.
///
/// Returns service status and version.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Validate that a required string parameter is present and non-blank.
fn require_non_blank<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, Response> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(bad_request(format!(
            "required parameter '{name}' is missing or blank"
        ))),
    }
}

/// Validate that a required parameter is present and parses as `f64`.
fn require_float(value: Option<&str>, name: &str) -> Result<f64, Response> {
    match value {
        Some(v) => v.trim().parse::<f64>().map_err(|_| {
            bad_request(format!("parameter '{name}' must be a number, got '{v}'"))
        }),
        None => Err(bad_request(format!(
            "required parameter '{name}' is missing"
        ))),
    }
}

/// Map a forwarding-client error to the structured 400 body.
///
/// Configuration, parse and transport failures are all presented uniformly
/// as 400 for compatibility with the service this replaces.
fn forwarding_error(e: gmaps::MapsError) -> Response {
    tracing::warn!(error = %e, "forwarding to Google Maps failed");
    bad_request(e.to_string())
}

/// Build a 400 response with the structured error body.
fn bad_request(message: String) -> Response {
    let status = StatusCode::BAD_REQUEST;
    (
        status,
        Json(ErrorResponse {
            status: status.as_u16(),
            error: "Bad Request".to_string(),
            message,
        }),
    )
        .into_response()
}
