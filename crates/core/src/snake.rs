//! Snake module - body, heading and movement on the toroidal grid
//!
//! The body is a deque of cells ordered head first. Every tick the caller:
//!
//! 1. applies at most one quarter turn,
//! 2. asks [`Snake::is_self_collision`] against the current body (tail still
//!    occupied),
//! 3. either [`Snake::grow`]s onto the food or [`Snake::move_mirror`]s forward.
//!
//! The snake itself never decides that the round is over; it only answers
//! questions about its next step.

use std::collections::VecDeque;
use std::iter;

use crate::error::{Error, Result};
use crate::grid;
use crate::types::{Direction, GridSize, Point};

/// Ordered body segments, front = head, back = tail
pub type Body = VecDeque<Point>;

/// The snake: body, heading and the grid it lives on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Body,
    direction: Direction,
    size: GridSize,
}

impl Snake {
    /// Create a snake from explicit segments (head first)
    ///
    /// Fails if the body is empty, leaves the grid, or visits a cell twice.
    pub fn new<I>(body: I, size: GridSize, direction: Direction) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let body: Body = body.into_iter().collect();
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }

        let mut occupied = vec![false; size.cell_count()];
        for &segment in &body {
            if !grid::contains(segment, size) {
                return Err(Error::OutOfBounds(segment));
            }
            let idx = grid::to_index(segment, size);
            if occupied[idx] {
                return Err(Error::Overlap(segment));
            }
            occupied[idx] = true;
        }

        Ok(Self {
            body,
            direction,
            size,
        })
    }

    /// Create a straight snake of `length` cells trailing behind `head`
    ///
    /// Heading `Left` puts the tail to the right of the head, which is the
    /// classic starting layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::Snake;
    /// use tui_snake_types::{Direction, GridSize, Point};
    ///
    /// let size = GridSize::new(10, 50).unwrap();
    /// let snake = Snake::straight(Point::new(5, 25), 5, size, Direction::Left).unwrap();
    /// assert_eq!(snake.head(), Point::new(5, 25));
    /// assert_eq!(snake.tail(), Point::new(5, 29));
    /// ```
    pub fn straight(head: Point, length: usize, size: GridSize, direction: Direction) -> Result<Self> {
        let behind = direction.opposite();
        let body = iter::successors(Some(grid::wrap(head, size)), |&p| {
            Some(grid::wrap(p.step(behind), size))
        })
        .take(length);
        Self::new(body, size, direction)
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Head position one step ahead, NOT wrapped
    ///
    /// This is a look-ahead value; it may lie one cell outside the grid.
    pub fn predict_head_move(&self) -> Point {
        self.head().step(self.direction)
    }

    /// Predicted head after wrapping, i.e. the cell the head will actually enter
    pub fn next_head(&self) -> Point {
        grid::wrap(self.predict_head_move(), self.size)
    }

    pub fn is_inside_body(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Check if the next step runs into the body
    ///
    /// The tail still counts as occupied even though a plain move would vacate
    /// it first.
    pub fn is_self_collision(&self) -> bool {
        self.is_inside_body(self.next_head())
    }

    /// Drop the tail and push the unwrapped predicted head
    fn advance(&mut self) {
        let new_head = self.predict_head_move();
        self.body.pop_back();
        self.body.push_front(new_head);
    }

    /// Move one cell forward, wrapping the new head around the grid edges
    pub fn move_mirror(&mut self) {
        self.advance();
        self.body[0] = grid::wrap(self.body[0], self.size);
    }

    /// Grow onto `food` if the next step lands on it
    ///
    /// On success the food cell becomes the new head and the tail stays put.
    /// Returns false and leaves the body untouched otherwise.
    pub fn grow(&mut self, food: Point) -> bool {
        if self.next_head() != food {
            return false;
        }
        self.body.push_front(food);
        true
    }

    /// Check if `end` can be reached from `start` through free cells
    ///
    /// Body segments are walls. A target on the body is never reachable. The
    /// start cell itself is always entered, even if the body covers it.
    pub fn is_reachable_from(&self, start: Point, end: Point) -> bool {
        let end = grid::wrap(end, self.size);
        if self.is_inside_body(end) {
            return false;
        }
        self.flood(grid::wrap(start, self.size), |cell| cell == end)
    }

    /// Check if `location` is reachable from where the head will be next tick
    pub fn is_reachable(&self, location: Point) -> bool {
        self.is_reachable_from(self.next_head(), location)
    }

    /// Every free cell reachable from where the head will be next tick
    pub fn reachable_cells(&self) -> Vec<Point> {
        let start = self.next_head();
        let start_blocked = self.is_inside_body(start);
        let mut cells = Vec::new();
        self.flood(start, |cell| {
            if !(start_blocked && cell == start) {
                cells.push(cell);
            }
            false
        });
        cells
    }

    /// Breadth-first walk from `start`; stops early once `visit` returns true
    fn flood<F>(&self, start: Point, mut visit: F) -> bool
    where
        F: FnMut(Point) -> bool,
    {
        let mut seen = vec![false; self.size.cell_count()];
        for &segment in &self.body {
            seen[grid::to_index(segment, self.size)] = true;
        }

        let mut queue = VecDeque::new();
        seen[grid::to_index(start, self.size)] = true;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            if visit(cell) {
                return true;
            }
            for next in grid::neighbors4(cell, self.size) {
                let idx = grid::to_index(next, self.size);
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(rows: i32, cols: i32) -> GridSize {
        GridSize::new(rows, cols).unwrap()
    }

    fn snake(cells: &[(i32, i32)], rows: i32, cols: i32, dir: Direction) -> Snake {
        Snake::new(cells.iter().map(|&c| Point::from(c)), size(rows, cols), dir).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_bodies() {
        let s = size(5, 5);
        assert_eq!(
            Snake::new(Vec::new(), s, Direction::Left),
            Err(Error::EmptyBody)
        );
        assert_eq!(
            Snake::new([Point::new(0, 0), Point::new(0, 5)], s, Direction::Left),
            Err(Error::OutOfBounds(Point::new(0, 5)))
        );
        assert_eq!(
            Snake::new(
                [Point::new(0, 0), Point::new(0, 1), Point::new(0, 0)],
                s,
                Direction::Left
            ),
            Err(Error::Overlap(Point::new(0, 0)))
        );
    }

    #[test]
    fn test_straight_wraps_and_rejects_overlong() {
        let s = size(3, 4);
        let snake = Snake::straight(Point::new(1, 2), 3, s, Direction::Left).unwrap();
        let cells: Vec<_> = snake.body().iter().copied().collect();
        assert_eq!(
            cells,
            vec![Point::new(1, 2), Point::new(1, 3), Point::new(1, 0)]
        );

        assert!(matches!(
            Snake::straight(Point::new(1, 2), 5, s, Direction::Left),
            Err(Error::Overlap(_))
        ));
    }

    #[test]
    fn test_predict_is_unwrapped() {
        let snake = snake(&[(0, 0), (0, 1)], 4, 4, Direction::Left);
        assert_eq!(snake.predict_head_move(), Point::new(0, -1));
        assert_eq!(snake.next_head(), Point::new(0, 3));
    }

    #[test]
    fn test_move_keeps_length_and_wraps_head() {
        let mut snake = snake(&[(0, 0), (0, 1), (0, 2)], 4, 4, Direction::Left);
        snake.move_mirror();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(0, 3));
        assert_eq!(snake.tail(), Point::new(0, 1));
    }

    #[test]
    fn test_single_segment_moves() {
        let mut snake = snake(&[(2, 2)], 4, 4, Direction::Up);
        snake.move_mirror();
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.head(), Point::new(1, 2));
    }

    #[test]
    fn test_grow_only_on_food() {
        let mut snake = snake(&[(1, 1), (1, 2)], 4, 4, Direction::Left);
        assert!(!snake.grow(Point::new(3, 3)));
        assert_eq!(snake.len(), 2);

        assert!(snake.grow(Point::new(1, 0)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(1, 0));
        assert_eq!(snake.tail(), Point::new(1, 2));
    }

    #[test]
    fn test_grow_across_edge() {
        let mut snake = snake(&[(1, 0), (1, 1)], 4, 4, Direction::Left);
        assert!(snake.grow(Point::new(1, 3)));
        assert_eq!(snake.head(), Point::new(1, 3));
    }

    #[test]
    fn test_tail_counts_for_collision() {
        // 2x2 loop: head (0,0) heading Down enters (1,0), the current tail.
        let snake = snake(&[(0, 0), (0, 1), (1, 1), (1, 0)], 5, 5, Direction::Down);
        assert_eq!(snake.next_head(), snake.tail());
        assert!(snake.is_self_collision());
    }

    #[test]
    fn test_no_collision_on_open_grid() {
        let snake = snake(&[(2, 2), (2, 3), (2, 4)], 5, 5, Direction::Left);
        assert!(!snake.is_self_collision());
    }

    #[test]
    fn test_reachable_rejects_body_target() {
        let snake = snake(&[(2, 2), (2, 3), (2, 4)], 5, 5, Direction::Left);
        assert!(!snake.is_reachable(Point::new(2, 3)));
        assert!(snake.is_reachable(Point::new(0, 0)));
    }

    #[test]
    fn test_reachable_cells_excludes_body() {
        let snake = snake(&[(0, 0), (0, 1)], 2, 3, Direction::Down);
        let cells = snake.reachable_cells();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| !snake.is_inside_body(*c)));
    }
}
