//! History capacity invariant for the limited-moves rule.

use super::super::rules::HISTORY_CAPACITY;
use super::super::{GameState, Mark, RuleMode};
use super::Invariant;

/// Invariant: in limited mode each mark has at most three live moves and
/// at most three cells on the board. Always holds in classic mode.
pub struct HistoryCapacityInvariant;

impl Invariant<GameState> for HistoryCapacityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.mode() == RuleMode::Classic {
            return true;
        }
        [Mark::X, Mark::O].into_iter().all(|mark| {
            state.recent_moves(mark).len() <= HISTORY_CAPACITY
                && state.board().count(mark) <= HISTORY_CAPACITY
        })
    }

    fn description() -> &'static str {
        "Each mark keeps at most three cells in limited mode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Move, Position};

    #[test]
    fn test_classic_always_holds() {
        let mut state = GameState::new(RuleMode::Classic);
        for idx in [0, 1, 2, 3] {
            state.board.cells_mut()[idx] = Cell::Marked(Mark::X);
        }
        assert!(HistoryCapacityInvariant::holds(&state));
    }

    #[test]
    fn test_limited_play_holds() {
        let mut state = GameState::new(RuleMode::Limited);
        let mut mark = Mark::X;
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::MiddleRight,
            Position::TopCenter,
            Position::BottomCenter,
            Position::MiddleLeft,
        ] {
            state.apply(Move::new(mark, pos)).unwrap();
            assert!(HistoryCapacityInvariant::holds(&state));
            mark = mark.opponent();
        }
    }

    #[test]
    fn test_four_marks_violate() {
        let mut state = GameState::new(RuleMode::Limited);
        for idx in [0, 1, 5, 7] {
            state.board.cells_mut()[idx] = Cell::Marked(Mark::X);
        }
        assert!(!HistoryCapacityInvariant::holds(&state));
    }
}
