//! Engine error types.

use super::position::Position;
use super::types::Mark;
use derive_more::{Display, Error};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("the game is already over")]
    GameOver,

    /// It is not this mark's turn.
    #[display("it is not {}'s turn", _0)]
    WrongTurn(Mark),

    /// A computer move was requested in a two-player session.
    #[display("this session has no computer opponent")]
    NoComputerOpponent,
}

/// Error returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The move is not allowed in the current state.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(not(source))] MoveRejection),

    /// Row or column outside 0..=2.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The move selector was asked to move on a full board.
    #[display("No legal move available")]
    NoLegalMove,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl EngineError {
    /// Returns true for recoverable input rejections.
    ///
    /// `OutOfBounds`, `NoLegalMove` and invariant violations are caller
    /// or engine bugs; `InvalidMove` is expected during normal play.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, EngineError::InvalidMove(_))
    }
}
