//! # gmaps - Google Maps Forwarding Client
//!
//! Minimal async client that forwards geocoding, reverse geocoding and
//! places autocomplete requests to the Google Maps web APIs, injecting a
//! server-side API key and returning the provider's JSON untouched.
//!
//! ## Features
//!
//! - **Opaque pass-through**: provider bodies are returned as untyped
//!   `serde_json::Value`, so provider API changes never break callers
//! - **Explicit configuration**: key, base URL and timeout are builder
//!   inputs (or `GMAPS_*` environment variables), never ambient globals
//! - **Lazy key validation**: a missing key fails with a typed error on
//!   first use, with zero network calls
//!
//! ## Quick Start
//!
//! ```ignore
//! use gmaps::MapsClientBuilder;
//!
//! let client = MapsClientBuilder::from_env().build()?;
//! let json = client.geocode("Avenida Paulista", Some("pt-BR")).await?;
//! println!("status: {}", json["status"]);
//! ```
//!
//! ## Endpoints
//!
//! | Operation | Provider endpoint |
//! |-----------|-------------------|
//! | `geocode` | `GET {base}/geocode/json` |
//! | `reverse_geocode` | `GET {base}/geocode/json` (via `latlng`) |
//! | `places_autocomplete` | `GET {base}/place/autocomplete/json` |

pub mod client;
pub mod error;

// Re-export main types at crate root for convenience
pub use client::{MapsClient, MapsClientBuilder, DEFAULT_BASE_URL};
pub use error::{MapsError, Result};
