//! Application metrics collection and reporting.

use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use surface_common::SurfaceVariant;

/// Metrics collector for the figure API.
#[derive(Debug)]
pub struct MetricsCollector {
    pub figure_requests: AtomicU64,
    pub renders_total: AtomicU64,
    pub render_errors: AtomicU64,
    pub polygons_total: AtomicU64,

    /// Render wall time, recorded from the blocking render task
    render_times: Mutex<TimingStats>,

    start_time: Instant,
}

#[derive(Debug, Default, Clone, Copy)]
struct TimingStats {
    count: u64,
    total_us: u64,
    min_us: u64,
    max_us: u64,
    last_us: u64,
}

impl TimingStats {
    fn record(&mut self, duration_us: u64) {
        self.count += 1;
        self.total_us += duration_us;
        self.last_us = duration_us;
        if self.min_us == 0 || duration_us < self.min_us {
            self.min_us = duration_us;
        }
        if duration_us > self.max_us {
            self.max_us = duration_us;
        }
    }

    fn avg_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.total_us as f64 / self.count as f64) / 1000.0
        }
    }
}

/// Point-in-time view of the collector, served as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub figure_requests: u64,
    pub renders_total: u64,
    pub render_errors: u64,
    pub polygons_total: u64,
    pub render_avg_ms: f64,
    pub render_last_ms: f64,
    pub render_min_ms: f64,
    pub render_max_ms: f64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            figure_requests: AtomicU64::new(0),
            renders_total: AtomicU64::new(0),
            render_errors: AtomicU64::new(0),
            polygons_total: AtomicU64::new(0),
            render_times: Mutex::new(TimingStats::default()),
            start_time: Instant::now(),
        }
    }

    /// Record an incoming figure request
    pub fn record_figure_request(&self, surface: SurfaceVariant) {
        self.figure_requests.fetch_add(1, Ordering::Relaxed);
        counter!("figure_requests_total", "surface" => surface.name()).increment(1);
    }

    /// Record a finished (or abandoned) render
    pub fn record_render(&self, duration_us: u64, polygons: usize, success: bool) {
        self.renders_total.fetch_add(1, Ordering::Relaxed);
        self.polygons_total.fetch_add(polygons as u64, Ordering::Relaxed);
        if !success {
            self.render_errors.fetch_add(1, Ordering::Relaxed);
            counter!("figure_render_errors_total").increment(1);
        }
        histogram!("figure_render_duration_seconds").record(duration_us as f64 / 1_000_000.0);

        if let Ok(mut times) = self.render_times.lock() {
            times.record(duration_us);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let times = self
            .render_times
            .lock()
            .map(|t| *t)
            .unwrap_or_default();

        MetricsSnapshot {
            uptime_secs: self.start_time.elapsed().as_secs(),
            figure_requests: self.figure_requests.load(Ordering::Relaxed),
            renders_total: self.renders_total.load(Ordering::Relaxed),
            render_errors: self.render_errors.load(Ordering::Relaxed),
            polygons_total: self.polygons_total.load(Ordering::Relaxed),
            render_avg_ms: times.avg_ms(),
            render_last_ms: times.last_us as f64 / 1000.0,
            render_min_ms: times.min_us as f64 / 1000.0,
            render_max_ms: times.max_us as f64 / 1000.0,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
