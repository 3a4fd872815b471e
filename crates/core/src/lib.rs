//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Snake rules and session state. It has **zero
//! dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run headless or behind any front-end
//!
//! # Module Structure
//!
//! - [`grid`]: toroidal wrap-around, flat indexing and 4-neighbourhood
//! - [`snake`]: body/heading state machine, self-collision and reachability
//! - [`food`]: bounded food placement on reachable free cells
//! - [`rng`]: small LCG for reproducible food placement
//! - [`config`]: session configuration and validation
//! - [`game_state`]: per-tick control flow, score and restart
//!
//! # Game Rules
//!
//! - **Wrap-around**: the grid is a torus; there are no walls
//! - **Quarter turns only**: a 180° reversal takes two ticks
//! - **Conservative collision**: the tail cell still counts as occupied on the
//!   tick it would be vacated
//! - **Fair food**: food only appears where the snake can actually reach it
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState, TickOutcome};
//! use tui_snake_types::Command;
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//!
//! game.apply_command(Command::TurnLeft);
//! match game.tick() {
//!     TickOutcome::Moved { vacated } => assert!(!game.snake().is_inside_body(vacated)),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{Error, Result};
pub use food::place_food;
pub use game_state::{GameState, Status, TickOutcome};
pub use rng::SimpleRng;
pub use snake::{Body, Snake};
pub use snapshot::GameSnapshot;
