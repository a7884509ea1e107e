//! CareFinder map feed HTTP microservice.
//!
//! Thin-handler pattern: all lookup and formatting logic lives in
//! `carefinder-lib`; this crate provides HTTP glue only -- router assembly,
//! environment configuration, logging bootstrap, and status code mapping.
//!
//! # Endpoints
//!
//! - `GET /map_feed` - filtered provider lookup shaped for the map renderer
//! - `GET /health` - liveness probe

#![deny(warnings)]

pub mod config;
pub mod feed;
pub mod health;
pub mod logging;
pub mod state;

pub use config::ServiceConfig;
pub use state::{AppState, AppStateError};

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the service router with all routes and layers attached.
///
/// The feed is consumed cross-origin by the external renderer, so CORS is
/// permissive.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/map_feed", get(feed::map_feed))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
