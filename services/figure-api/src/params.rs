//! Request parameter parsing.
//!
//! Parsing never fails. Missing, empty or unusable values fall back to the
//! defaults and are only mentioned at debug level.

use surface_common::config::{
    is_valid_dimension, DEFAULT_HEIGHT, DEFAULT_LOWLAND_COLOR, DEFAULT_PEAK_COLOR, DEFAULT_WIDTH,
};
use surface_common::{RenderConfig, SurfaceVariant};
use tracing::debug;

/// Raw figure parameters, as the first occurrence of each query key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureParams {
    /// Canvas width (`w`)
    pub width: Option<String>,
    /// Canvas height (`h`)
    pub height: Option<String>,
    /// Fill for cells with a positive corner (`pc`)
    pub peak_color: Option<String>,
    /// Fill for cells with a negative corner and no positive one (`lc`)
    pub lowland_color: Option<String>,
}

impl FigureParams {
    /// Collect parameters from decoded query pairs. Later duplicates of a key
    /// are ignored.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "w" => &mut params.width,
                "h" => &mut params.height,
                "pc" => &mut params.peak_color,
                "lc" => &mut params.lowland_color,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }
        params
    }

    /// Resolve into a render config for the given surface.
    pub fn into_config(self, surface: SurfaceVariant) -> RenderConfig {
        let width = parse_dimension("w", self.width.as_deref(), DEFAULT_WIDTH);
        let height = parse_dimension("h", self.height.as_deref(), DEFAULT_HEIGHT);
        let peak_color = color_or_default(self.peak_color, DEFAULT_PEAK_COLOR);
        let lowland_color = color_or_default(self.lowland_color, DEFAULT_LOWLAND_COLOR);

        // Dimensions were validated above, so this cannot fail
        RenderConfig::new(surface, width, height, peak_color, lowland_color)
            .unwrap_or_else(|_| RenderConfig::for_surface(surface))
    }
}

/// Parse a canvas dimension, falling back to `default` when the value is
/// absent, unparsable, or not a finite positive number.
pub fn parse_dimension(name: &str, raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse::<f64>() {
        Ok(value) if is_valid_dimension(value) => value,
        Ok(value) => {
            debug!(param = name, value, "Ignoring non-positive canvas dimension");
            default
        }
        Err(e) => {
            debug!(param = name, raw, error = %e, "Ignoring unparsable canvas dimension");
            default
        }
    }
}

/// Colors are opaque: any non-empty value is used verbatim.
pub fn color_or_default(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(color) if !color.is_empty() => color,
        _ => default.to_string(),
    }
}
