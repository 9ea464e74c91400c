//! Isometric projection of grid vertices.
//!
//! A grid vertex (i, j) is mapped to the domain point (x, y), lifted to
//! z = f(x, y) by the configured surface, then rotated by 30 degrees onto the
//! canvas:
//!
//! ```text
//! sx = W/2 + (x - y) * cos(30deg) * xy_scale
//! sy = H/2 + (x + y) * sin(30deg) * xy_scale - z * z_scale
//! ```
//!
//! with `xy_scale = W / 2 / XY_RANGE` and `z_scale = H * 0.4`. The canvas y
//! axis points down, so positive heights move a vertex up the image.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use surface_common::grid::grid_to_domain;
use surface_common::{classify, RenderConfig, SignCategory, XY_RANGE};

/// Rotation angle of the isometric view (30 degrees).
pub const ISO_ANGLE: f64 = PI / 6.0;

/// Fraction of the canvas height that one unit of z spans.
const Z_SCALE_FACTOR: f64 = 0.4;

/// A projected grid vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    /// Screen x in pixels
    pub x: f64,
    /// Screen y in pixels (down is positive)
    pub y: f64,
    /// Sign of the surface height at this vertex
    pub category: SignCategory,
}

/// Projector bound to one render configuration.
///
/// Holds only values derived from the config, so two projectors built from
/// equal configs produce identical corners.
#[derive(Debug, Clone)]
pub struct IsometricProjector<'a> {
    config: &'a RenderConfig,
    xy_scale: f64,
    z_scale: f64,
    sin_angle: f64,
    cos_angle: f64,
}

impl<'a> IsometricProjector<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        let (xy_scale, z_scale) = scales(config.canvas_width(), config.canvas_height());
        Self {
            config,
            xy_scale,
            z_scale,
            sin_angle: ISO_ANGLE.sin(),
            cos_angle: ISO_ANGLE.cos(),
        }
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    /// Project grid vertex (i, j). Indices run from 0 to `CELLS` inclusive.
    pub fn project(&self, i: usize, j: usize) -> Corner {
        let (x, y) = grid_to_domain(i, j);
        let z = self.config.surface().evaluate(x, y);

        let width = self.config.canvas_width();
        let height = self.config.canvas_height();

        let sx = width / 2.0 + (x - y) * self.cos_angle * self.xy_scale;
        let sy = height / 2.0 + (x + y) * self.sin_angle * self.xy_scale - z * self.z_scale;

        Corner {
            x: sx,
            y: sy,
            category: classify(z),
        }
    }
}

/// Horizontal and vertical scale factors for a canvas.
pub fn scales(width: f64, height: f64) -> (f64, f64) {
    (width / 2.0 / XY_RANGE, height * Z_SCALE_FACTOR)
}

/// Project a single vertex without keeping a projector around.
pub fn project(i: usize, j: usize, config: &RenderConfig) -> Corner {
    IsometricProjector::new(config).project(i, j)
}
