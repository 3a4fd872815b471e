use serde::Serialize;

use crate::game_state::Status;
use crate::types::{Direction, GridSize, Point};

/// Read-only view of a session for renderers and observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub grid: GridSize,
    /// Head first
    pub body: Vec<Point>,
    pub direction: Direction,
    pub food: Point,
    pub score: u32,
    pub status: Status,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.status == Status::Running
    }
}
