//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and buffers them
//! so the game applies at most one turn per tick. Nothing here touches the
//! engine directly; the game loop drains the queue.

pub mod map;
pub mod queue;

pub use tui_snake_types as types;

pub use map::{handle_key_event, replay_choice, should_quit};
pub use queue::CommandQueue;
