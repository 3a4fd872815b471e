use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid;
use crate::types::{
    GridSize, Point, DEFAULT_COLS, DEFAULT_ROWS, FOOD_OFFSET, INITIAL_LENGTH, MAX_FOOD_SAMPLES,
    TICK_MS,
};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid height
    pub rows: i32,
    /// Grid width
    pub cols: i32,
    /// Starting body length
    pub initial_length: usize,
    /// Tick interval for the game loop
    pub tick_ms: u32,
    /// Columns between the starting head and the first food (to the left)
    pub food_offset: i32,
    /// Random draws before food placement enumerates reachable cells
    pub max_food_samples: u32,
    /// Food RNG seed
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            initial_length: INITIAL_LENGTH,
            tick_ms: TICK_MS,
            food_offset: FOOD_OFFSET,
            max_food_samples: MAX_FOOD_SAMPLES,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::new(self.rows, self.cols).ok_or(Error::InvalidGridSize {
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Starting head cell (grid center)
    pub fn start_head(&self) -> Result<Point> {
        Ok(self.grid_size()?.center())
    }

    /// First food cell, `food_offset` columns left of the starting head
    pub fn start_food(&self) -> Result<Point> {
        let size = self.grid_size()?;
        let head = size.center();
        let col = head
            .col
            .checked_sub(self.food_offset)
            .ok_or(Error::FoodOffsetOutOfRange(self.food_offset))?;
        Ok(grid::wrap(Point::new(head.row, col), size))
    }

    /// Check every setting a session depends on
    pub fn validate(&self) -> Result<()> {
        let size = self.grid_size()?;
        if self.tick_ms == 0 {
            return Err(Error::ZeroTick);
        }
        if self.initial_length == 0 {
            return Err(Error::EmptyBody);
        }
        if self.initial_length > size.cols() as usize {
            return Err(Error::LengthTooLong {
                length: self.initial_length,
                cols: size.cols(),
            });
        }

        // The body trails to the right of the head.
        let head = size.center();
        let food = self.start_food()?;
        let offset = (food.col - head.col).rem_euclid(size.cols()) as usize;
        if food.row == head.row && offset < self.initial_length {
            return Err(Error::FoodOnBody(food));
        }
        Ok(())
    }
}
