//! Tests for the figure API router.
//!
//! Requests go through the full router (extractors, streaming body) without
//! binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use figure_api::build_router;
use figure_api::state::{AppState, ServiceConfig};
use renderer::render_figure_to_string;
use surface_common::{RenderConfig, SurfaceVariant};

fn app_with(config: ServiceConfig) -> Router {
    build_router(Arc::new(AppState::new(config, None)))
}

fn app() -> Router {
    app_with(ServiceConfig::default())
}

async fn fetch(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn expected(surface: SurfaceVariant) -> String {
    render_figure_to_string(&RenderConfig::for_surface(surface)).unwrap()
}

// ============================================================================
// Figure endpoint tests
// ============================================================================

#[tokio::test]
async fn test_root_renders_default_surface() {
    let (status, content_type, body) = fetch(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert!(body.contains("width='600' height='320'>"));
    assert!(body.contains("fill='#0000FF'"));
    assert_eq!(body.matches("<polygon ").count(), 10_000);
    assert_eq!(body, expected(SurfaceVariant::Default));
}

#[tokio::test]
async fn test_named_paths_select_surface() {
    let cases = [
        ("/egg", SurfaceVariant::Egg),
        ("/saddle", SurfaceVariant::Saddle),
        ("/climb", SurfaceVariant::Climb),
        ("/anything/else", SurfaceVariant::Default),
    ];
    for (path, surface) in cases {
        let (status, _, body) = fetch(app(), path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body, expected(surface), "{}", path);
    }
}

#[tokio::test]
async fn test_selector_priority() {
    let (_, _, body) = fetch(app(), "/saddle/egg").await;
    assert_eq!(body, expected(SurfaceVariant::Egg));

    let (_, _, body) = fetch(app(), "/climb-saddle").await;
    assert_eq!(body, expected(SurfaceVariant::Saddle));
}

#[tokio::test]
async fn test_query_does_not_select_surface() {
    let (_, _, body) = fetch(app(), "/?pc=saddlebrown").await;
    assert!(body.contains("fill='saddlebrown'"));
    assert!(!body.contains("fill='#0000FF'"));
    let config =
        RenderConfig::new(SurfaceVariant::Default, 600.0, 320.0, "saddlebrown", "#FF0000").unwrap();
    assert_eq!(body, render_figure_to_string(&config).unwrap());
}

#[tokio::test]
async fn test_parameters_applied() {
    let (_, _, body) = fetch(app(), "/egg?w=800.7&h=400&pc=gold&lc=navy").await;

    assert!(body.contains("width='800' height='400'>"));
    assert_eq!(body.matches("fill='gold'").count(), 10_000);

    let config = RenderConfig::new(SurfaceVariant::Egg, 800.7, 400.0, "gold", "navy").unwrap();
    assert_eq!(body, render_figure_to_string(&config).unwrap());
}

#[tokio::test]
async fn test_bad_parameters_fall_back() {
    let (status, _, body) = fetch(app(), "/saddle?w=wide&h=-3&pc=&lc=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected(SurfaceVariant::Saddle));
}

#[tokio::test]
async fn test_small_chunks_produce_same_document() {
    let app = app_with(ServiceConfig { chunk_size: 7 });
    let (_, _, body) = fetch(app, "/climb").await;
    assert_eq!(body, expected(SurfaceVariant::Climb));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_stay_isolated() {
    let app = app();
    let uris = [
        ("/egg?w=300&pc=purple", SurfaceVariant::Egg, 300.0, "purple"),
        ("/saddle?w=900&pc=orange", SurfaceVariant::Saddle, 900.0, "orange"),
        ("/climb?w=450&pc=olive", SurfaceVariant::Climb, 450.0, "olive"),
        ("/?w=1200&pc=black", SurfaceVariant::Default, 1200.0, "black"),
    ];

    let handles: Vec<_> = uris
        .iter()
        .map(|(uri, ..)| tokio::spawn(fetch(app.clone(), *uri)))
        .collect();

    for (handle, (uri, surface, width, peak)) in handles.into_iter().zip(uris) {
        let (_, _, body) = handle.await.unwrap();
        let config = RenderConfig::new(surface, width, 320.0, peak, "#FF0000").unwrap();
        assert_eq!(body, render_figure_to_string(&config).unwrap(), "{}", uri);
    }
}

// ============================================================================
// Health and metrics tests
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, _, body) = fetch(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_metrics_count_requests() {
    let app = app();
    fetch(app.clone(), "/egg").await;
    fetch(app.clone(), "/saddle").await;

    let (status, content_type, body) = fetch(app.clone(), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert!(body.contains("figure_service_requests 2\n"));

    let (_, _, body) = fetch(app, "/api/metrics").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["figure_requests"], 2);
}
