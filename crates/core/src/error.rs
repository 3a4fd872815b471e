//! Construction-time errors
//!
//! Nothing in the per-tick path fails: self-collision is a game outcome, not an
//! error. These only surface when building a snake or a game from input that
//! breaks the grid or body invariants.

use thiserror::Error;

use crate::types::Point;

/// Engine setup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Grid has a zero or negative dimension
    #[error("invalid grid size {rows}x{cols}")]
    InvalidGridSize { rows: i32, cols: i32 },

    /// Snake body has no segments
    #[error("snake body is empty")]
    EmptyBody,

    /// Segment lies outside the grid
    #[error("segment {0} is outside the grid")]
    OutOfBounds(Point),

    /// Two segments share a cell
    #[error("segment {0} occurs more than once")]
    Overlap(Point),

    /// Starting length cannot be laid out without self-overlap
    #[error("initial length {length} does not fit a grid {cols} columns wide")]
    LengthTooLong { length: usize, cols: i32 },

    /// Tick interval of zero
    #[error("tick interval must be positive")]
    ZeroTick,

    /// Food offset pushes the starting food past the representable range
    #[error("food offset {0} is out of range")]
    FoodOffsetOutOfRange(i32),

    /// Starting food would sit on the starting body
    #[error("starting food {0} overlaps the snake")]
    FoodOnBody(Point),
}

pub type Result<T> = std::result::Result<T, Error>;
