//! RNG module - deterministic cell sampling for food placement
//!
//! A small LCG keeps food placement reproducible: the same seed yields the same
//! sequence of food cells for the same sequence of moves, which keeps session
//! tests deterministic.

use crate::grid;
use crate::types::{GridSize, Point};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly random cell of the grid
    pub fn next_point(&mut self, size: GridSize) -> Point {
        let idx = self.next_range(size.cell_count() as u32) as usize;
        grid::from_index(idx, size)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
