//! Surface functions z = f(x, y).
//!
//! Every surface is a pure function of the domain point. Removable
//! singularities (division by zero at the origin or on an axis) are not
//! patched: they produce NaN, which flows through projection and into the
//! emitted document.

use serde::{Deserialize, Serialize};

/// The closed set of renderable surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceVariant {
    /// Radial ripple sin(r)/r, served on every path without a known name.
    #[default]
    #[serde(rename = "drop")]
    Default,
    Climb,
    Saddle,
    Egg,
}

impl SurfaceVariant {
    pub const ALL: [SurfaceVariant; 4] = [
        SurfaceVariant::Default,
        SurfaceVariant::Climb,
        SurfaceVariant::Saddle,
        SurfaceVariant::Egg,
    ];

    /// Pick a surface from a request path.
    ///
    /// Substrings are checked in the order egg, saddle, climb and the first
    /// hit wins, so `/egg/saddle` is an egg. Anything else is the default.
    pub fn from_request_path(path: &str) -> Self {
        if path.contains("egg") {
            SurfaceVariant::Egg
        } else if path.contains("saddle") {
            SurfaceVariant::Saddle
        } else if path.contains("climb") {
            SurfaceVariant::Climb
        } else {
            SurfaceVariant::Default
        }
    }

    /// Stable name used in logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceVariant::Default => "drop",
            SurfaceVariant::Climb => "climb",
            SurfaceVariant::Saddle => "saddle",
            SurfaceVariant::Egg => "egg",
        }
    }

    /// Evaluate the surface height at (x, y).
    pub fn evaluate(self, x: f64, y: f64) -> f64 {
        match self {
            SurfaceVariant::Default => default_view(x, y),
            SurfaceVariant::Climb => climb(x, y),
            SurfaceVariant::Saddle => saddle(x, y),
            SurfaceVariant::Egg => eggform(x, y),
        }
    }
}

impl std::fmt::Display for SurfaceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// sin(r)/r with r the distance from the origin. NaN at the origin.
pub fn default_view(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    r.sin() / r
}

/// Product of sinc along each axis. NaN on either axis.
pub fn climb(x: f64, y: f64) -> f64 {
    (x.sin() / x) * (y.sin() / y)
}

/// 2^sin(x) * 2^sin(y) / 12. Strictly positive everywhere.
pub fn eggform(x: f64, y: f64) -> f64 {
    2f64.powf(x.sin()) * 2f64.powf(y.sin()) / 12.0
}

/// Hyperbolic paraboloid (x/25)^2 - (y/17)^2.
pub fn saddle(x: f64, y: f64) -> f64 {
    x.powi(2) / 25f64.powi(2) - y.powi(2) / 17f64.powi(2)
}
