//! Common types shared by the surface figure crates and services.

pub mod config;
pub mod error;
pub mod grid;
pub mod sign;
pub mod surface;

pub use config::RenderConfig;
pub use error::{SurfaceError, SurfaceResult};
pub use grid::{CELLS, XY_RANGE};
pub use sign::{classify, SignCategory};
pub use surface::SurfaceVariant;
