//! Gmaps Service - HTTP façade for the Google Maps web APIs.
//!
//! Forwards geocoding, reverse geocoding and places autocomplete requests
//! to Google Maps, injecting the server-side API key and returning the
//! provider's JSON unmodified.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GMAPS_API_KEY` | Google Maps API key | None (requests fail until set) |
//! | `GMAPS_BASE_URL` | Provider base URL | `https://maps.googleapis.com/maps/api` |
//! | `GMAPS_TIMEOUT_SECS` | Outbound request timeout | 10 |
//! | `GMAPS_PORT` | HTTP server port | 8080 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /api/maps/geocode?address=X&language=Y` - Geocode an address
//! - `GET /api/maps/reverse?lat=X&lng=Y&language=Z` - Reverse geocode coordinates
//! - `GET /api/maps/places/autocomplete?input=X&language=Y` - Place predictions
//! - `GET /health` - Health check

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use gmaps::MapsClientBuilder;
use gmaps_service::{handlers, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gmaps_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("GMAPS_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // Build the forwarding client from environment variables using the
    // library. The library handles: GMAPS_API_KEY, GMAPS_BASE_URL,
    // GMAPS_TIMEOUT_SECS. A missing key is reported here but only fails
    // requests, not startup.
    let maps = MapsClientBuilder::from_env().build()?;

    if !maps.has_api_key() {
        tracing::warn!("GMAPS_API_KEY not set, forwarding requests will fail");
    }

    tracing::info!(
        base_url = maps.base_url(),
        api_key_configured = maps.has_api_key(),
        port = port,
        "Starting gmaps service"
    );

    let state = Arc::new(AppState { maps });

    // Build router
    let app = Router::new()
        .route("/api/maps/geocode", get(handlers::geocode))
        .route("/api/maps/reverse", get(handlers::reverse_geocode))
        .route(
            "/api/maps/places/autocomplete",
            get(handlers::places_autocomplete),
        )
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
