//! Grid module - toroidal coordinate arithmetic
//!
//! The playfield is a `rows x cols` rectangle whose edges are glued together:
//! leaving through the left edge re-enters on the right, leaving through the
//! top re-enters at the bottom. Cells are addressed as `(row, col)` and map to a
//! flat row-major index (`row * cols + col`) for visited-set bookkeeping.

use crate::types::{Direction, GridSize, Point};

/// Normalize a point into `[0, rows) x [0, cols)`
///
/// Each axis wraps independently: `-1` becomes `bound - 1` and `bound` becomes
/// `0`. The engine only ever steps one cell at a time, but any offset wraps
/// consistently.
#[inline]
pub fn wrap(point: Point, bounds: GridSize) -> Point {
    Point::new(
        point.row.rem_euclid(bounds.rows()),
        point.col.rem_euclid(bounds.cols()),
    )
}

/// Check if a point already lies inside the grid
#[inline]
pub fn contains(point: Point, bounds: GridSize) -> bool {
    point.row >= 0 && point.row < bounds.rows() && point.col >= 0 && point.col < bounds.cols()
}

/// Flat row-major index of an in-bounds point
#[inline(always)]
pub fn to_index(point: Point, bounds: GridSize) -> usize {
    debug_assert!(contains(point, bounds), "{point} outside {bounds:?}");
    point.row as usize * bounds.cols() as usize + point.col as usize
}

/// Inverse of [`to_index`]
#[inline]
pub fn from_index(index: usize, bounds: GridSize) -> Point {
    let cols = bounds.cols() as usize;
    Point::new((index / cols) as i32, (index % cols) as i32)
}

/// The four axis-aligned neighbours of `point`, wrapped into the grid
///
/// Order follows [`Direction::ALL`]: up, down, left, right.
pub fn neighbors4(point: Point, bounds: GridSize) -> [Point; 4] {
    Direction::ALL.map(|dir| wrap(point.step(dir), bounds))
}
