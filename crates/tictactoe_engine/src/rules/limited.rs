//! Limited-moves rule: each mark keeps only its three most recent cells.

use super::super::{Board, EngineError, Mark, Move, MoveRejection, Position};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Maximum number of live moves per mark.
pub const HISTORY_CAPACITY: usize = 3;

/// One mark's live moves, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: VecDeque<Move>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no moves are recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether the next move will evict the oldest one.
    pub fn is_at_capacity(&self) -> bool {
        self.moves.len() >= HISTORY_CAPACITY
    }

    /// The move that would be evicted next.
    pub fn oldest(&self) -> Option<&Move> {
        self.moves.front()
    }

    /// Live moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Live positions, oldest first.
    pub fn positions(&self) -> Vec<Position> {
        self.moves.iter().map(|m| m.position).collect()
    }

    fn push(&mut self, mov: Move) {
        self.moves.push_back(mov);
    }

    fn pop_oldest(&mut self) -> Option<Move> {
        self.moves.pop_front()
    }
}

/// Independent histories for X and O.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveHistories {
    x: MoveHistory,
    o: MoveHistory,
}

impl MoveHistories {
    /// Creates empty histories.
    pub fn new() -> Self {
        Self::default()
    }

    /// History for `mark`.
    pub fn for_mark(&self, mark: Mark) -> &MoveHistory {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn for_mark_mut(&mut self, mark: Mark) -> &mut MoveHistory {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Total number of live moves across both marks.
    pub fn total(&self) -> usize {
        self.x.len() + self.o.len()
    }
}

/// Places `mark` at `(row, col)` under the limited-moves rule.
///
/// If the mark already has three live moves, its oldest move is removed
/// and that cell cleared before the new mark is placed. The target must be
/// empty on the board as it stands before eviction, so a mark cannot
/// re-place onto its own about-to-vanish cell. Validation happens before
/// any mutation; on error `board` and `histories` are unchanged.
///
/// Returns the evicted position, if any.
#[instrument(level = "trace", skip(board, histories))]
pub fn apply_limited_move(
    board: &mut Board,
    histories: &mut MoveHistories,
    row: usize,
    col: usize,
    mark: Mark,
) -> Result<Option<Position>, EngineError> {
    let pos = Position::from_coords(row, col)?;
    if !board.is_empty(pos) {
        return Err(EngineError::InvalidMove(MoveRejection::CellOccupied(pos)));
    }

    let history = histories.for_mark_mut(mark);
    let evicted = if history.is_at_capacity() {
        history.pop_oldest().map(|old| {
            board.clear_at(old.position);
            old.position
        })
    } else {
        None
    };

    history.push(Move::new(mark, pos));
    board.place_at(pos, mark)?;

    if let Some(old) = evicted {
        debug!(%mark, evicted = %old, placed = %pos, "Evicted oldest mark");
    }
    Ok(evicted)
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    fn play(board: &mut Board, histories: &mut MoveHistories, moves: &[(usize, usize, Mark)]) {
        for &(row, col, mark) in moves {
            apply_limited_move(board, histories, row, col, mark).unwrap();
        }
    }

    #[test]
    fn test_fourth_move_evicts_oldest() {
        let mut board = Board::new();
        let mut histories = MoveHistories::new();
        play(
            &mut board,
            &mut histories,
            &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)],
        );
        // Three in a row is a win in play; the rule engine alone does not care.
        let evicted = apply_limited_move(&mut board, &mut histories, 1, 0, Mark::X).unwrap();

        assert_eq!(evicted, Some(Position::TopLeft));
        assert_eq!(board.get(0, 0), Ok(Cell::Empty));
        assert_eq!(board.get(1, 0), Ok(Cell::Marked(Mark::X)));
        assert_eq!(
            histories.for_mark(Mark::X).positions(),
            vec![Position::TopCenter, Position::TopRight, Position::MiddleLeft]
        );
    }

    #[test]
    fn test_marks_do_not_evict_each_other() {
        let mut board = Board::new();
        let mut histories = MoveHistories::new();
        play(
            &mut board,
            &mut histories,
            &[
                (0, 0, Mark::X),
                (1, 1, Mark::O),
                (2, 2, Mark::X),
                (0, 2, Mark::O),
                (2, 0, Mark::X),
                (1, 0, Mark::O),
            ],
        );
        // X's fourth move evicts X's (0, 0); O's cells stay put.
        apply_limited_move(&mut board, &mut histories, 0, 1, Mark::X).unwrap();
        assert_eq!(board.get(0, 0), Ok(Cell::Empty));
        assert_eq!(board.count(Mark::O), 3);
        assert_eq!(histories.for_mark(Mark::O).len(), 3);
        assert_eq!(histories.for_mark(Mark::X).len(), 3);
    }

    #[test]
    fn test_occupied_target_leaves_state_untouched() {
        let mut board = Board::new();
        let mut histories = MoveHistories::new();
        play(
            &mut board,
            &mut histories,
            &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)],
        );
        let before = (board.clone(), histories.clone());

        // The oldest own cell is still occupied before eviction.
        let err = apply_limited_move(&mut board, &mut histories, 0, 0, Mark::X).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidMove(MoveRejection::CellOccupied(Position::TopLeft))
        );
        assert_eq!((board, histories), before);
    }

    #[test]
    fn test_out_of_bounds_leaves_state_untouched() {
        let mut board = Board::new();
        let mut histories = MoveHistories::new();
        let err = apply_limited_move(&mut board, &mut histories, 0, 3, Mark::O).unwrap_err();
        assert_eq!(err, EngineError::OutOfBounds { row: 0, col: 3 });
        assert!(histories.for_mark(Mark::O).is_empty());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_never_more_than_three_per_mark() {
        let mut board = Board::new();
        let mut histories = MoveHistories::new();
        let cycle = [(0, 0), (1, 1), (2, 2), (0, 1), (1, 2), (2, 0), (0, 2), (1, 0), (2, 1)];
        for (row, col) in cycle.iter().cycle().take(27).copied() {
            if board.get(row, col) == Ok(Cell::Empty) {
                apply_limited_move(&mut board, &mut histories, row, col, Mark::X).unwrap();
            }
            assert!(board.count(Mark::X) <= HISTORY_CAPACITY);
            assert!(histories.for_mark(Mark::X).len() <= HISTORY_CAPACITY);
        }
    }
}
