//! Cell-by-cell walk of the sample lattice.
//!
//! Each cell (i, j) becomes one quad whose corners are projected in the order
//! (i+1, j), (i, j), (i, j+1), (i+1, j+1). Cells are visited row-major (i
//! outer, j inner) and SVG paints later shapes over earlier ones, so both the
//! corner order and the visit order show up in the output.

use projection::{Corner, IsometricProjector};
use serde::Serialize;
use surface_common::{RenderConfig, SignCategory, CELLS};

/// Fill used when no corner of a cell has a sign.
pub const ACCENT_COLOR: &str = "#00ff00";

/// Which of the three fills a cell receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Peak,
    Lowland,
    Accent,
}

impl FillKind {
    /// Pick a fill from the corner categories.
    ///
    /// Positive beats Negative: a cell straddling a root is always a peak.
    pub fn for_corners(categories: [SignCategory; 4]) -> Self {
        if categories.contains(&SignCategory::Positive) {
            FillKind::Peak
        } else if categories.contains(&SignCategory::Negative) {
            FillKind::Lowland
        } else {
            FillKind::Accent
        }
    }

    pub fn color(self, config: &RenderConfig) -> &str {
        match self {
            FillKind::Peak => config.peak_color(),
            FillKind::Lowland => config.lowland_color(),
            FillKind::Accent => ACCENT_COLOR,
        }
    }
}

/// Fill color for a cell with the given corner categories.
pub fn cell_color(categories: [SignCategory; 4], config: &RenderConfig) -> &str {
    FillKind::for_corners(categories).color(config)
}

/// One projected cell, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<'a> {
    /// Screen points in winding order
    pub points: [(f64, f64); 4],
    pub fill: &'a str,
    pub kind: FillKind,
}

/// Counts of emitted polygons by fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub polygons: usize,
    pub peak: usize,
    pub lowland: usize,
    pub accent: usize,
}

impl RenderStats {
    pub fn record(&mut self, polygon: &Polygon<'_>) {
        self.polygons += 1;
        match polygon.kind {
            FillKind::Peak => self.peak += 1,
            FillKind::Lowland => self.lowland += 1,
            FillKind::Accent => self.accent += 1,
        }
    }
}

/// Drives the projector over every cell of the lattice.
#[derive(Debug, Clone)]
pub struct GridRenderer<'a> {
    projector: IsometricProjector<'a>,
}

impl<'a> GridRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            projector: IsometricProjector::new(config),
        }
    }

    /// Build the polygon for cell (i, j). Both indices must be below `CELLS`.
    ///
    /// Shared vertices are projected again for every cell that touches them.
    pub fn cell_polygon(&self, i: usize, j: usize) -> Polygon<'a> {
        let corners: [Corner; 4] = [
            self.projector.project(i + 1, j),
            self.projector.project(i, j),
            self.projector.project(i, j + 1),
            self.projector.project(i + 1, j + 1),
        ];

        let kind = FillKind::for_corners(corners.map(|c| c.category));
        let config: &'a RenderConfig = self.projector.config();

        Polygon {
            points: corners.map(|c| (c.x, c.y)),
            fill: kind.color(config),
            kind,
        }
    }

    /// All cells in draw order.
    pub fn polygons(&self) -> impl Iterator<Item = Polygon<'a>> + '_ {
        (0..CELLS).flat_map(move |i| (0..CELLS).map(move |j| self.cell_polygon(i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SignCategory::{Negative, Positive, Zero};

    #[test]
    fn test_fill_priority() {
        assert_eq!(FillKind::for_corners([Positive, Zero, Zero, Zero]), FillKind::Peak);
        assert_eq!(FillKind::for_corners([Zero, Negative, Zero, Zero]), FillKind::Lowland);
        assert_eq!(FillKind::for_corners([Zero, Zero, Zero, Zero]), FillKind::Accent);
        assert_eq!(FillKind::for_corners([Negative, Zero, Positive, Negative]), FillKind::Peak);
    }

    #[test]
    fn test_accent_ignores_config() {
        let config = RenderConfig::default();
        assert_eq!(cell_color([Zero; 4], &config), "#00ff00");
    }

    #[test]
    fn test_stats_record() {
        let mut stats = RenderStats::default();
        let polygon = Polygon {
            points: [(0.0, 0.0); 4],
            fill: "red",
            kind: FillKind::Lowland,
        };
        stats.record(&polygon);
        stats.record(&polygon);
        assert_eq!(stats.polygons, 2);
        assert_eq!(stats.lowland, 2);
        assert_eq!(stats.peak + stats.accent, 0);
    }
}
