//! Screen-space projection of sampled surfaces.
//!
//! Only the fixed-angle isometric view is implemented; there is no
//! perspective foreshortening.

pub mod isometric;

pub use isometric::{project, Corner, IsometricProjector, ISO_ANGLE};
