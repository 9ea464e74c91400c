//! Sign classification of sampled heights.

use serde::{Deserialize, Serialize};

/// Tri-state sign of a sampled height, used only to pick fill colors.
///
/// The discriminants are stable: Zero=0, Positive=1, Negative=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SignCategory {
    Zero = 0,
    Positive = 1,
    Negative = 2,
}

impl SignCategory {
    /// Numeric code of the category.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Classify a height by sign.
///
/// NaN is neither below nor above zero, so it lands in `Zero`. Heights at
/// the singular points of the sinc-style surfaces are NaN and therefore
/// render with the accent color unless a neighbouring corner has a sign.
pub fn classify(z: f64) -> SignCategory {
    if z < 0.0 {
        SignCategory::Negative
    } else if z > 0.0 {
        SignCategory::Positive
    } else {
        SignCategory::Zero
    }
}
