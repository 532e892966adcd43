//! Scoring module - running score from placed pieces and cleared lines
//!
//! Rules:
//! - Every frozen piece is worth a flat 10 points, whatever its shape.
//! - Clearing `n` lines at once is worth `100 * n`, plus `50 * (n - 1)` when
//!   more than one line clears (1 → 100, 2 → 250, 3 → 400, 4 → 550).
//!
//! The total only ever grows.

use crate::types::{LINE_SCORE, MULTI_LINE_BONUS, TETROMINO_SCORE};

/// Points for clearing `lines` lines with a single piece
pub fn calculate_line_score(lines: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let bonus = if lines > 1 {
        MULTI_LINE_BONUS * (lines - 1)
    } else {
        0
    };
    LINE_SCORE * lines + bonus
}

/// Accumulates the score and the line/piece counters shown next to it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    total: u32,
    lines: u32,
    pieces: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a frozen piece. Returns the points awarded.
    pub fn count_tetromino(&mut self) -> u32 {
        self.pieces = self.pieces.saturating_add(1);
        self.add(TETROMINO_SCORE)
    }

    /// Credit `n` cleared lines. Returns the points awarded.
    pub fn count_lines(&mut self, n: u32) -> u32 {
        self.lines = self.lines.saturating_add(n);
        self.add(calculate_line_score(n))
    }

    fn add(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        points
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }
}
