//! Surface figure API service library.
//!
//! Renders isometric SVG figures of a small family of surfaces over HTTP.
//! The library half exists so the router can be exercised in tests.

pub mod handlers;
pub mod metrics;
pub mod params;
pub mod state;
pub mod streaming;

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the service router.
///
/// Named routes take precedence; every other path renders a figure, with the
/// surface picked from the path.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health and metrics
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/metrics", get(handlers::api_metrics_handler))
        // Figures
        .route("/", get(handlers::figure_handler))
        .route("/*path", get(handlers::figure_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
