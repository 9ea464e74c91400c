//! Per-request render configuration.

use serde::Serialize;

use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::SurfaceVariant;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 320.0;
pub const DEFAULT_PEAK_COLOR: &str = "#0000FF";
pub const DEFAULT_LOWLAND_COLOR: &str = "#FF0000";

/// Everything one render needs, built once per request.
///
/// Fields are private so a constructed config always has a finite, positive
/// canvas. Colors are opaque strings and are written into the document
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConfig {
    surface: SurfaceVariant,
    canvas_width: f64,
    canvas_height: f64,
    peak_color: String,
    lowland_color: String,
}

impl RenderConfig {
    /// Build a config, rejecting canvas sizes that are not finite and positive.
    pub fn new(
        surface: SurfaceVariant,
        canvas_width: f64,
        canvas_height: f64,
        peak_color: impl Into<String>,
        lowland_color: impl Into<String>,
    ) -> SurfaceResult<Self> {
        validate_dimension("width", canvas_width)?;
        validate_dimension("height", canvas_height)?;

        Ok(Self {
            surface,
            canvas_width,
            canvas_height,
            peak_color: peak_color.into(),
            lowland_color: lowland_color.into(),
        })
    }

    /// Default canvas and colors for the given surface.
    pub fn for_surface(surface: SurfaceVariant) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    pub fn surface(&self) -> SurfaceVariant {
        self.surface
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn peak_color(&self) -> &str {
        &self.peak_color
    }

    pub fn lowland_color(&self) -> &str {
        &self.lowland_color
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceVariant::Default,
            canvas_width: DEFAULT_WIDTH,
            canvas_height: DEFAULT_HEIGHT,
            peak_color: DEFAULT_PEAK_COLOR.to_string(),
            lowland_color: DEFAULT_LOWLAND_COLOR.to_string(),
        }
    }
}

/// Whether a canvas dimension is usable.
pub fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_dimension(param: &str, value: f64) -> SurfaceResult<()> {
    if is_valid_dimension(value) {
        Ok(())
    } else {
        Err(SurfaceError::InvalidConfig {
            param: param.to_string(),
            message: format!("must be a finite positive number, got {}", value),
        })
    }
}
