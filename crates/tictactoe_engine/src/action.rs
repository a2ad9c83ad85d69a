//! First-class move records.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Moves are domain events: they feed the per-mark histories in
/// limited mode and the session's move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Row of the move (0-2).
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the move (0-2).
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}
