//! Terminal "game renderer" module.
//!
//! A deliberately small drawing layer for terminal gameplay: the snake only
//! ever changes a couple of cells per tick, so instead of a framebuffer the
//! view emits the individual cells to repaint and the renderer queues them as
//! crossterm commands.
//!
//! Goals:
//! - Keep `core` free of terminal state
//! - Repaint only what a tick changed (old tail, new head, new food)
//! - Keep the view pure so it can be unit-tested without a terminal

pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use game_view::{full_frame, status_line, tick_delta, Glyph, Paint};
pub use renderer::{encode_paints_into, TerminalRenderer};
