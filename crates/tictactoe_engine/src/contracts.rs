//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, move)} apply {Q(before, after)}.

use super::invariants::{GameInvariants, InvariantSet};
use super::{EngineError, GameState, GameStatus, Move, MoveRejection};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the game is in progress and it is the mover's turn.
pub struct MarksTurn;

impl MarksTurn {
    /// Checks the status against the moving mark.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), EngineError> {
        match state.status() {
            GameStatus::InProgress(turn) if *turn == mov.mark => Ok(()),
            GameStatus::InProgress(_) => {
                Err(EngineError::InvalidMove(MoveRejection::WrongTurn(mov.mark)))
            }
            GameStatus::Won(_) | GameStatus::Draw => {
                Err(EngineError::InvalidMove(MoveRejection::GameOver))
            }
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the target cell.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), EngineError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(EngineError::InvalidMove(MoveRejection::CellOccupied(
                mov.position,
            )))
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game in progress and mover's turn
/// - Target cell empty
///
/// Postconditions:
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), EngineError> {
        MarksTurn::check(action, state)?;
        CellIsEmpty::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), EngineError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position, RuleMode};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new(RuleMode::Classic);
        let action = Move::new(Mark::X, Position::Center);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut state = GameState::new(RuleMode::Classic);
        state.apply(Move::new(Mark::X, Position::Center)).unwrap();
        assert_eq!(
            MoveContract::pre(&state, &Move::new(Mark::O, Position::Center)),
            Err(EngineError::InvalidMove(MoveRejection::CellOccupied(
                Position::Center
            )))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let state = GameState::new(RuleMode::Limited);
        assert_eq!(
            MoveContract::pre(&state, &Move::new(Mark::O, Position::Center)),
            Err(EngineError::InvalidMove(MoveRejection::WrongTurn(Mark::O)))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut state = GameState::new(RuleMode::Classic);
        for (mark, pos) in [
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::Center),
            (Mark::X, Position::TopCenter),
            (Mark::O, Position::BottomLeft),
            (Mark::X, Position::TopRight),
        ] {
            state.apply(Move::new(mark, pos)).unwrap();
        }
        assert!(state.is_over());
        assert_eq!(
            MoveContract::pre(&state, &Move::new(Mark::O, Position::BottomRight)),
            Err(EngineError::InvalidMove(MoveRejection::GameOver))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new(RuleMode::Classic);
        let mut after = before.clone();
        after.apply(Move::new(Mark::X, Position::Center)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new(RuleMode::Classic);
        let mut after = before.clone();
        after.apply(Move::new(Mark::X, Position::Center)).unwrap();
        after.board.cells_mut()[0] = Cell::Marked(Mark::O);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(EngineError::InvariantViolation(_))
        ));
    }
}
