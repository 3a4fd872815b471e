//! Per-tick command buffering.
//!
//! Terminals deliver key presses whenever they arrive, but the snake should
//! only turn once per tick. Presses queue up here and the game loop pops one
//! per tick, so a quick `j j` becomes two turns over two ticks instead of an
//! instant reversal.

use arrayvec::ArrayVec;

use crate::types::Command;

/// Presses buffered beyond this are dropped.
pub const QUEUE_CAPACITY: usize = 4;

/// Bounded FIFO of pending turn commands.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: ArrayVec<Command, QUEUE_CAPACITY>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a command; returns false if the queue is full.
    ///
    /// `Quit` is not buffered: the loop must see it immediately.
    pub fn push(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            return false;
        }
        self.pending.try_push(command).is_ok()
    }

    /// Take the command for this tick, if any.
    pub fn pop(&mut self) -> Option<Command> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop everything (e.g. between rounds).
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
