//! Gmaps Service Library
//!
//! HTTP handlers and types for the Google Maps forwarding façade.
//! This library is used by both the gmaps-service binary and integration tests.

pub mod handlers;

use gmaps::MapsClient;

/// Application state shared across handlers.
pub struct AppState {
    /// Forwarding client for the Google Maps web APIs.
    pub maps: MapsClient,
}

// Re-export commonly used types for convenience
pub use handlers::{
    AutocompleteParams, ErrorResponse, GeocodeParams, HealthResponse, ReverseParams,
};
