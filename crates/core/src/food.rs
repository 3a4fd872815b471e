//! Food placement - pick a free cell the snake can actually get to
//!
//! Random sampling is cheap while the board is mostly empty. Once the snake
//! fills enough of the grid that samples keep missing, placement falls back to
//! a single flood fill and picks among the cells it found, so it always
//! terminates.

use tracing::warn;

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::Point;

/// Choose the next food cell
///
/// Tries up to `max_samples` random cells, then enumerates every free cell
/// reachable from the snake's next head. Returns `None` when no such cell
/// exists.
pub fn place_food(snake: &Snake, rng: &mut SimpleRng, max_samples: u32) -> Option<Point> {
    let size = snake.grid_size();

    for _ in 0..max_samples {
        let candidate = rng.next_point(size);
        if snake.is_reachable(candidate) {
            return Some(candidate);
        }
    }

    let cells = snake.reachable_cells();
    warn!(
        samples = max_samples,
        reachable = cells.len(),
        snake_len = snake.len(),
        "random food placement missed, enumerating reachable cells"
    );
    if cells.is_empty() {
        return None;
    }
    let pick = rng.next_range(cells.len() as u32) as usize;
    Some(cells[pick])
}
