//! Figure rendering for sampled surfaces.
//!
//! - `grid`: walks the sample lattice and turns each cell into a colored quad
//! - `svg`: streams those quads into an SVG document

pub mod grid;
pub mod svg;

use std::io::Write;
use std::time::Instant;

use surface_common::{RenderConfig, SurfaceResult};

pub use grid::{cell_color, FillKind, GridRenderer, Polygon, RenderStats, ACCENT_COLOR};
pub use svg::{SvgNumber, SvgWriter};

/// Render a complete figure into `out`.
///
/// Polygons are written one by one as they are produced; nothing beyond the
/// current cell is held in memory. Buffering, if any, is up to the writer.
pub fn render_figure<W: Write>(config: &RenderConfig, out: W) -> SurfaceResult<RenderStats> {
    let start = Instant::now();

    let mut svg = SvgWriter::begin(out, config.canvas_width(), config.canvas_height())?;
    let mut stats = RenderStats::default();
    for polygon in GridRenderer::new(config).polygons() {
        stats.record(&polygon);
        svg.polygon(&polygon)?;
    }
    svg.finish()?;

    tracing::debug!(
        surface = config.surface().name(),
        polygons = stats.polygons,
        peak = stats.peak,
        lowland = stats.lowland,
        accent = stats.accent,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Rendered figure"
    );

    Ok(stats)
}

/// Render a figure into an in-memory string.
pub fn render_figure_to_string(config: &RenderConfig) -> SurfaceResult<String> {
    let mut out = Vec::new();
    render_figure(config, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
