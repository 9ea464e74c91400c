//! Figure rendering handler.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, instrument};

use surface_common::SurfaceVariant;

use crate::params::FigureParams;
use crate::state::AppState;
use crate::streaming::stream_figure;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// GET /{anything} - Render the surface named by the path as SVG.
///
/// The surface comes from the path (`/egg`, `/saddle`, `/climb`, default
/// otherwise); `w`, `h`, `pc` and `lc` come from the query string. A
/// malformed query string is treated as empty.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn figure_handler(
    Extension(state): Extension<Arc<AppState>>,
    uri: Uri,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let surface = SurfaceVariant::from_request_path(uri.path());
    let params = query
        .map(|Query(pairs)| FigureParams::from_pairs(pairs))
        .unwrap_or_default();
    let config = params.into_config(surface);

    state.metrics.record_figure_request(surface);
    info!(
        surface = surface.name(),
        width = config.canvas_width(),
        height = config.canvas_height(),
        "Rendering figure"
    );

    let body = stream_figure(config, state.config.chunk_size, state.metrics.clone());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
