//! Game state module - one session of Snake
//!
//! This module ties the snake, food placement and RNG together and runs the
//! per-tick control flow:
//!
//! ```text
//! turn -> predict head -> self-collision? -> grow onto food | move forward
//!                                                  \-> place new food
//! ```
//!
//! Rendering and input stay outside; callers feed [`Command`]s in and read the
//! [`TickOutcome`] (or a [`GameSnapshot`]) back out.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Direction, Point};

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Snake is alive and moving
    Running,
    /// Snake ran into itself
    Over,
    /// No free reachable cell is left for food
    Cleared,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Plain move; `vacated` is the old tail cell, now empty
    Moved { vacated: Point },
    /// Snake ate and grew; `food` is where the next food was placed
    Grew { food: Point },
    /// Next step ran into the body; round is over
    Collided,
    /// Snake ate the last reachable food; round is over
    Cleared,
    /// Round had already ended, nothing happened
    Ended,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    food: Point,
    rng: SimpleRng,
    score: u32,
    status: Status,
    /// Monotonic round id (increments on restart)
    episode_id: u32,
}

impl GameState {
    /// Create a new session; fails if `config` does not describe a playable board
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = SimpleRng::new(config.seed);
        let (snake, food) = Self::initial_round(&config)?;

        Ok(Self {
            config,
            snake,
            food,
            rng,
            score: 0,
            status: Status::Running,
            episode_id: 0,
        })
    }

    fn initial_round(config: &GameConfig) -> Result<(Snake, Point)> {
        let size = config.grid_size()?;
        let snake = Snake::straight(
            config.start_head()?,
            config.initial_length,
            size,
            Direction::Left,
        )?;
        let food = config.start_food()?;
        if snake.is_inside_body(food) {
            return Err(Error::FoodOnBody(food));
        }
        Ok((snake, food))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Running
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Apply an input command
    ///
    /// Only turns touch the snake. `Quit` belongs to the caller and is ignored
    /// here. Returns true if the heading changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.is_over() {
            return false;
        }
        match command {
            Command::TurnLeft => {
                self.snake.turn_left();
                true
            }
            Command::TurnRight => {
                self.snake.turn_right();
                true
            }
            Command::Quit => false,
        }
    }

    /// Advance the session by one tick
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Ended;
        }

        if self.snake.is_self_collision() {
            self.status = Status::Over;
            info!(
                episode = self.episode_id,
                score = self.score,
                length = self.snake.len(),
                "snake ran into itself"
            );
            return TickOutcome::Collided;
        }

        if !self.snake.grow(self.food) {
            let vacated = self.snake.tail();
            self.snake.move_mirror();
            return TickOutcome::Moved { vacated };
        }

        self.score += 1;
        debug!(score = self.score, length = self.snake.len(), "snake grew");

        match place_food(&self.snake, &mut self.rng, self.config.max_food_samples) {
            Some(food) => {
                self.food = food;
                TickOutcome::Grew { food }
            }
            None => {
                self.status = Status::Cleared;
                info!(
                    episode = self.episode_id,
                    score = self.score,
                    "no reachable cell left for food"
                );
                TickOutcome::Cleared
            }
        }
    }

    /// Start a fresh round with the same configuration
    ///
    /// The food RNG keeps running, so consecutive rounds differ.
    pub fn restart(&mut self) -> Result<()> {
        let (snake, food) = Self::initial_round(&self.config)?;
        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.status = Status::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.snake.grid_size(),
            body: self.snake.body().iter().copied().collect(),
            direction: self.snake.direction(),
            food: self.food,
            score: self.score,
            status: self.status,
            episode_id: self.episode_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default()).unwrap();

        assert_eq!(state.status(), Status::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.snake().len(), 5);
        assert_eq!(state.snake().head(), Point::new(5, 25));
        assert_eq!(state.snake().direction(), Direction::Left);
        assert_eq!(state.food(), Point::new(5, 15));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(GameState::new(GameConfig::new(10, 0)).is_err());
    }

    #[test]
    fn test_tick_moves_and_reports_vacated_tail() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let tail = state.snake().tail();

        assert_eq!(state.tick(), TickOutcome::Moved { vacated: tail });
        assert_eq!(state.snake().head(), Point::new(5, 24));
        assert_eq!(state.snake().len(), 5);
    }

    #[test]
    fn test_eats_first_food_on_tenth_tick() {
        let mut state = GameState::new(GameConfig::default()).unwrap();

        for _ in 0..9 {
            assert!(matches!(state.tick(), TickOutcome::Moved { .. }));
        }
        let outcome = state.tick();
        let TickOutcome::Grew { food } = outcome else {
            panic!("expected growth, got {outcome:?}");
        };
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 6);
        assert_eq!(state.snake().head(), Point::new(5, 15));
        assert_eq!(state.food(), food);
        assert!(!state.snake().is_inside_body(food));
    }

    #[test]
    fn test_quit_and_turns() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        assert!(!state.apply_command(Command::Quit));
        assert_eq!(state.snake().direction(), Direction::Left);

        assert!(state.apply_command(Command::TurnLeft));
        assert_eq!(state.snake().direction(), Direction::Down);
        assert!(state.apply_command(Command::TurnRight));
        assert_eq!(state.snake().direction(), Direction::Left);
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.score(), 1);

        state.restart().unwrap();
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), Status::Running);
        assert_eq!(state.snake().len(), 5);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(GameConfig::default()).unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.head(), Some(Point::new(5, 25)));
        assert_eq!(snap.body.len(), 5);
        assert_eq!(snap.food, Point::new(5, 15));
        assert!(snap.playable());

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["direction"], "Left");
    }
}
