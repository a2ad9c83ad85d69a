//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] and, in limited mode, the per-mark
//! [`MoveHistories`]. Rules are kept apart from board storage so the
//! session and the move selector share one placement path.

pub mod draw;
pub mod limited;
pub mod win;

pub use draw::{is_draw, is_full};
pub use limited::{HISTORY_CAPACITY, MoveHistories, MoveHistory, apply_limited_move};
pub use win::{LINES, WinLine, check_winner};

use super::{Board, EngineError, Mark, Position, RuleMode};

/// Places `mark` at `pos` under the given rule mode.
///
/// Returns the position cleared by eviction, if any. On error neither the
/// board nor the histories are modified.
pub fn apply_move(
    mode: RuleMode,
    board: &mut Board,
    histories: &mut MoveHistories,
    pos: Position,
    mark: Mark,
) -> Result<Option<Position>, EngineError> {
    match mode {
        RuleMode::Classic => board.place_at(pos, mark).map(|()| None),
        RuleMode::Limited => apply_limited_move(board, histories, pos.row(), pos.col(), mark),
    }
}
