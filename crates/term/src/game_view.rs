//! GameView: maps `core` session state into cells to repaint.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TickOutcome};
use crate::types::Point;

/// What to draw in one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Segment,
    Food,
    Blank,
    HorizontalBar,
    VerticalBar,
    Corner,
}

impl Glyph {
    pub fn ch(&self) -> char {
        match self {
            Glyph::Segment => 'O',
            Glyph::Food => 'F',
            Glyph::Blank => ' ',
            Glyph::HorizontalBar => '-',
            Glyph::VerticalBar => '|',
            Glyph::Corner => '*',
        }
    }
}

/// A single cell repaint at terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub x: u16,
    pub y: u16,
    pub glyph: Glyph,
}

impl Paint {
    fn at(point: Point, glyph: Glyph) -> Self {
        Self {
            x: point.col as u16,
            y: point.row as u16,
            glyph,
        }
    }
}

/// Everything needed to draw a round from scratch: border, body and food.
///
/// The border sits just outside the grid, on row `rows` and column `cols`.
pub fn full_frame(snap: &GameSnapshot, out: &mut Vec<Paint>) {
    out.clear();
    let rows = snap.grid.rows() as u16;
    let cols = snap.grid.cols() as u16;

    for x in 0..cols {
        out.push(Paint {
            x,
            y: rows,
            glyph: Glyph::HorizontalBar,
        });
    }
    for y in 0..rows {
        out.push(Paint {
            x: cols,
            y,
            glyph: Glyph::VerticalBar,
        });
    }
    out.push(Paint {
        x: cols,
        y: rows,
        glyph: Glyph::Corner,
    });

    out.extend(snap.body.iter().map(|&p| Paint::at(p, Glyph::Segment)));
    out.push(Paint::at(snap.food, Glyph::Food));
}

/// Cells that changed during the tick that produced `outcome`.
///
/// The old tail is blanked only on a plain move; growing never vacates a cell.
/// `snap` must be taken after the tick.
pub fn tick_delta(snap: &GameSnapshot, outcome: TickOutcome, out: &mut Vec<Paint>) {
    out.clear();
    match outcome {
        TickOutcome::Moved { vacated } => {
            out.push(Paint::at(vacated, Glyph::Blank));
            if let Some(head) = snap.head() {
                out.push(Paint::at(head, Glyph::Segment));
            }
        }
        TickOutcome::Grew { food } => {
            if let Some(head) = snap.head() {
                out.push(Paint::at(head, Glyph::Segment));
            }
            out.push(Paint::at(food, Glyph::Food));
        }
        TickOutcome::Cleared => {
            if let Some(head) = snap.head() {
                out.push(Paint::at(head, Glyph::Segment));
            }
        }
        TickOutcome::Collided | TickOutcome::Ended => {}
    }
}

/// Text for the line below the border.
pub fn status_line(snap: &GameSnapshot) -> String {
    format!("Score : {}", snap.score)
}
