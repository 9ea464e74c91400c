//! Health checks and metrics endpoints.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::metrics::MetricsSnapshot;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /metrics - Prometheus metrics endpoint
pub async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let mut output = state
        .prometheus
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default();

    let snapshot = state.metrics.snapshot();
    output.push_str(&format!(
        "# HELP figure_service_requests Figure requests since startup\n# TYPE figure_service_requests counter\nfigure_service_requests {}\n",
        snapshot.figure_requests
    ));
    output.push_str(&format!(
        "# HELP figure_service_renders Renders finished since startup\n# TYPE figure_service_renders counter\nfigure_service_renders {}\n",
        snapshot.renders_total
    ));
    output.push_str(&format!(
        "# HELP figure_service_render_errors Renders that did not complete\n# TYPE figure_service_render_errors counter\nfigure_service_render_errors {}\n",
        snapshot.render_errors
    ));

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        output,
    )
        .into_response()
}

/// GET /api/metrics - Collector snapshot as JSON
pub async fn api_metrics_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
