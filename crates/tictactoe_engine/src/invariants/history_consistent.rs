//! History consistency invariant: live moves and board marks agree.

use super::super::{Cell, GameState};
use super::Invariant;

/// Invariant: every occupied cell is backed by exactly one live move of the
/// same mark, and every live move's cell holds that mark.
///
/// Live moves are the whole log in classic mode and the per-mark
/// histories in limited mode.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let live = state.live_moves();
        let occupied = state
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        live.len() == occupied
            && live
                .iter()
                .all(|m| state.board().cell(m.position) == Cell::Marked(m.mark))
    }

    fn description() -> &'static str {
        "Live move history matches the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Position, RuleMode};

    #[test]
    fn test_classic_moves_hold() {
        let mut state = GameState::new(RuleMode::Classic);
        for (mark, pos) in [
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::Center),
            (Mark::X, Position::TopRight),
            (Mark::O, Position::BottomLeft),
        ] {
            state.apply(Move::new(mark, pos)).unwrap();
            assert!(HistoryConsistentInvariant::holds(&state));
        }
        assert_eq!(state.log().len(), 4);
    }

    #[test]
    fn test_limited_eviction_holds() {
        let mut state = GameState::new(RuleMode::Limited);
        for (mark, pos) in [
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::Center),
            (Mark::X, Position::TopRight),
            (Mark::O, Position::BottomLeft),
            (Mark::X, Position::MiddleLeft),
            (Mark::O, Position::BottomCenter),
            (Mark::X, Position::BottomRight),
        ] {
            state.apply(Move::new(mark, pos)).unwrap();
            assert!(HistoryConsistentInvariant::holds(&state));
        }
        // The log keeps everything; only three X moves are live.
        assert_eq!(state.log().len(), 7);
        assert_eq!(state.live_moves().len(), 6);
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut state = GameState::new(RuleMode::Classic);
        state.apply(Move::new(Mark::X, Position::Center)).unwrap();
        state.board.cells_mut()[0] = Cell::Marked(Mark::O);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut state = GameState::new(RuleMode::Classic);
        state.apply(Move::new(Mark::X, Position::Center)).unwrap();
        state.board.cells_mut()[4] = Cell::Marked(Mark::O);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
