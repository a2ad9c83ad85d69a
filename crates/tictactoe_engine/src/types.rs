//! Core domain types for tic-tac-toe.

use super::error::{EngineError, MoveRejection};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Which rule set governs placement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum RuleMode {
    /// Standard tic-tac-toe.
    #[default]
    Classic,
    /// Each mark keeps at most its three most recent cells.
    Limited,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (pos, cell) in Position::ALL.iter().zip(rows.iter().flatten()) {
            board.cells[pos.to_index()] = *cell;
        }
        board
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either index is outside 0..=2.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Position::from_coords(row, col).map(|pos| self.cell(pos))
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for invalid indices and
    /// [`EngineError::InvalidMove`] if the cell is already marked.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), EngineError> {
        let pos = Position::from_coords(row, col)?;
        self.place_at(pos, mark)
    }

    /// Places `mark` at a position, rejecting occupied cells.
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), EngineError> {
        if !self.is_empty(pos) {
            return Err(EngineError::InvalidMove(MoveRejection::CellOccupied(pos)));
        }
        self.cells[pos.to_index()] = Cell::Marked(mark);
        Ok(())
    }

    /// Clears the cell at `(row, col)` back to empty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either index is outside 0..=2.
    #[instrument(skip(self))]
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let pos = Position::from_coords(row, col)?;
        self.clear_at(pos);
        Ok(())
    }

    /// Clears a position back to empty.
    pub fn clear_at(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell; 9] {
        &mut self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.cell(pos);
        }
        rows
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Cell::Empty => (idx + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
