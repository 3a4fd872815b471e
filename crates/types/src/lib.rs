//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain value types, usable from the engine, the input layer and
//! the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! The default playfield matches the classic terminal layout:
//!
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//! - **Columns**: 50 (indexed 0-49, left to right)
//! - **Start**: snake head at the grid center, body trailing to the right
//!
//! The grid is toroidal: stepping past one edge re-enters at the opposite edge.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 10 | Grid height |
//! | `DEFAULT_COLS` | 50 | Grid width |
//! | `INITIAL_LENGTH` | 5 | Starting body length |
//! | `TICK_MS` | 100 | Fixed tick interval |
//! | `FOOD_OFFSET` | 10 | First food sits this many columns left of the head |
//! | `MAX_FOOD_SAMPLES` | 64 | Random food draws before falling back to enumeration |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GridSize, Point, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let size = GridSize::new(DEFAULT_ROWS, DEFAULT_COLS).unwrap();
//! assert_eq!(size.center(), Point::new(5, 25));
//!
//! // Turning is always a quarter turn
//! assert_eq!(Direction::Left.turn_left(), Direction::Down);
//! assert_eq!(Direction::Left.turn_right(), Direction::Up);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default grid height in rows
pub const DEFAULT_ROWS: i32 = 10;

/// Default grid width in columns
pub const DEFAULT_COLS: i32 = 50;

/// Starting snake length
pub const INITIAL_LENGTH: usize = 5;

/// Fixed tick interval in milliseconds
pub const TICK_MS: u32 = 100;

/// Column distance between the starting head and the first food
pub const FOOD_OFFSET: i32 = 10;

/// Random draws attempted before food placement enumerates reachable cells
pub const MAX_FOOD_SAMPLES: u32 = 64;


/// A grid cell as `(row, col)`
///
/// Rows grow downwards, columns grow to the right. Points produced by the
/// engine are always wrapped into the grid; unwrapped points only appear as
/// look-ahead values (see `Snake::predict_head_move`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by one unit in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Exclusive grid bounds (`rows`, `cols`), both strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    rows: i32,
    cols: i32,
}

/// Unchecked wire form of [`GridSize`]
#[derive(Deserialize)]
struct RawGridSize {
    rows: i32,
    cols: i32,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = String;

    fn try_from(raw: RawGridSize) -> Result<Self, Self::Error> {
        GridSize::new(raw.rows, raw.cols)
            .ok_or_else(|| format!("invalid grid size {}x{}", raw.rows, raw.cols))
    }
}

impl GridSize {
    /// Create grid bounds
    ///
    /// Returns `None` if either dimension is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::GridSize;
    ///
    /// assert!(GridSize::new(10, 50).is_some());
    /// assert!(GridSize::new(0, 50).is_none());
    /// ```
    pub fn new(rows: i32, cols: i32) -> Option<Self> {
        if rows <= 0 || cols <= 0 {
            return None;
        }
        Some(Self { rows, cols })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Center cell (rounded down)
    pub fn center(&self) -> Point {
        Point::new(self.rows / 2, self.cols / 2)
    }
}

/// Heading of the snake
///
/// There is no "stopped" state. Direction only changes by quarter turns, so a
/// reversal always passes through a perpendicular heading first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Rotate 90° counter-clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.turn_left(), Direction::Left);
    /// assert_eq!(Direction::Left.turn_left(), Direction::Down);
    /// assert_eq!(Direction::Down.turn_left(), Direction::Right);
    /// assert_eq!(Direction::Right.turn_left(), Direction::Up);
    /// ```
    pub fn turn_left(&self) -> Self {
        match self {
            Direction::Left => Direction::Down,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Down => Direction::Right,
        }
    }

    /// Rotate 90° clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.turn_right(), Direction::Right);
    /// assert_eq!(Direction::Right.turn_right(), Direction::Down);
    /// assert_eq!(Direction::Down.turn_right(), Direction::Left);
    /// assert_eq!(Direction::Left.turn_right(), Direction::Up);
    /// ```
    pub fn turn_right(&self) -> Self {
        match self {
            Direction::Left => Direction::Up,
            Direction::Right => Direction::Down,
            Direction::Up => Direction::Right,
            Direction::Down => Direction::Left,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` unit offset
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Per-tick command from the input layer
///
/// "No input this tick" is `Option::<Command>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quarter turn counter-clockwise
    TurnLeft,
    /// Quarter turn clockwise
    TurnRight,
    /// Leave the game (handled by the session, never by the engine)
    Quit,
}

/// Answer to the "play once more?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    Yes,
    No,
}
