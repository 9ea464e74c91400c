//! Sampling grid constants.
//!
//! The lattice is fixed: `CELLS` x `CELLS` cells spanning `XY_RANGE` units on
//! each axis, centered at the origin. Canvas size never changes it.

/// Number of cells along each axis.
pub const CELLS: usize = 100;

/// Width of the sampled domain on each axis, so x and y lie in [-15, 15].
pub const XY_RANGE: f64 = 30.0;

/// Map grid indices to domain coordinates.
///
/// Vertex indices run from 0 to `CELLS` inclusive; (CELLS/2, CELLS/2) is the
/// origin.
pub fn grid_to_domain(i: usize, j: usize) -> (f64, f64) {
    let x = XY_RANGE * (i as f64 / CELLS as f64 - 0.5);
    let y = XY_RANGE * (j as f64 / CELLS as f64 - 0.5);
    (x, y)
}

/// Total number of cells (and therefore polygons) in one figure.
pub const fn cell_count() -> usize {
    CELLS * CELLS
}
