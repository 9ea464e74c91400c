//! HTTP request handlers.
//!
//! - `figure`: renders a surface for any path not claimed by another route
//! - `health`: liveness and metrics endpoints

pub mod figure;
pub mod health;

pub use figure::{figure_handler, SVG_CONTENT_TYPE};
pub use health::{api_metrics_handler, health_handler, metrics_handler};
