//! Application state and shared resources.
//!
//! Nothing here is per-request: every render builds its own `RenderConfig`
//! from the request and never touches shared configuration.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::metrics::MetricsCollector;

/// Default bytes per streamed body chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Service-wide settings fixed at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub chunk_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Shared application state.
pub struct AppState {
    pub config: ServiceConfig,
    pub metrics: Arc<MetricsCollector>,
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: ServiceConfig, prometheus: Option<PrometheusHandle>) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsCollector::new()),
            prometheus,
        }
    }
}
