//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in priority order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and its three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct WinLine {
    /// The mark occupying the line.
    pub mark: Mark,
    /// The line's cells in canonical order.
    pub cells: [Position; 3],
}

impl WinLine {
    /// The line's cells as `(row, col)` pairs.
    pub fn coords(&self) -> [(usize, usize); 3] {
        self.cells.map(Position::coords)
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.cell(a);
        match cell {
            Cell::Marked(mark) if cell == board.cell(b) && cell == board.cell(c) => {
                Some(WinLine::new(mark, [a, b, c]))
            }
            _ => None,
        }
    })
}
