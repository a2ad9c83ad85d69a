//! Computer opponent: minimax search with alpha-beta pruning.
//!
//! The search is a pure function of the board, the per-mark move
//! histories and the rule mode. Candidate moves are scanned in row-major
//! order and a later candidate only replaces the current best on a
//! strictly higher score, so ties always resolve to the first cell found.
//!
//! Limited-mode positions can repeat (evictions undo earlier moves), so
//! the search is cut off at a fixed ply limit. Cut-off leaves score 0.

use super::rules::{MoveHistories, apply_move, check_winner};
use super::{Board, EngineError, Mark, Position, RuleMode};
use tracing::{debug, instrument};

/// Ply limit for classic mode. Nine plies reach every terminal position.
pub const CLASSIC_SEARCH_DEPTH: u8 = 9;

/// Ply limit for limited mode.
pub const LIMITED_SEARCH_DEPTH: u8 = 6;

/// Score of a win found one ply below the root is `WIN_SCORE - 1`.
const WIN_SCORE: i32 = 10;

/// Chooses moves for the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    mode: RuleMode,
    max_depth: u8,
}

impl MoveSelector {
    /// Creates a selector for `mode` with that mode's ply limit.
    pub fn new(mode: RuleMode) -> Self {
        let max_depth = match mode {
            RuleMode::Classic => CLASSIC_SEARCH_DEPTH,
            RuleMode::Limited => LIMITED_SEARCH_DEPTH,
        };
        Self { mode, max_depth }
    }

    /// The rule mode searched under.
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    /// The ply limit.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Returns the best move for `mark` to play next.
    ///
    /// `histories` is ignored in classic mode.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMove`] if the board is full.
    #[instrument(skip(self, board, histories), fields(mode = %self.mode))]
    pub fn select_move(
        &self,
        board: &Board,
        histories: &MoveHistories,
        mark: Mark,
    ) -> Result<Position, EngineError> {
        let mut search = Search {
            mode: self.mode,
            max_depth: self.max_depth,
            me: mark,
            nodes: 0,
        };

        let mut best: Option<(Position, i32)> = None;
        let mut alpha = i32::MIN;
        for pos in board.empty_positions() {
            let mut child = board.clone();
            let mut child_histories = histories.clone();
            apply_move(self.mode, &mut child, &mut child_histories, pos, mark)?;

            let score = search.minimax(&child, &child_histories, 1, false, alpha, i32::MAX);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
                alpha = alpha.max(score);
            }
        }

        let (pos, score) = best.ok_or(EngineError::NoLegalMove)?;
        debug!(%mark, position = %pos, score, nodes = search.nodes, "Selected move");
        Ok(pos)
    }
}

/// Per-call search context.
struct Search {
    mode: RuleMode,
    max_depth: u8,
    me: Mark,
    nodes: u64,
}

impl Search {
    /// Scores `board` from `self.me`'s point of view. `depth` counts plies
    /// already played below the root; `maximizing` is true when it is
    /// `self.me` to move.
    fn minimax(
        &mut self,
        board: &Board,
        histories: &MoveHistories,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(line) = check_winner(board) {
            let depth = i32::from(depth);
            return if line.mark == self.me {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if board.is_full() || depth >= self.max_depth {
            return 0;
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_positions() {
            let mut child = board.clone();
            let mut child_histories = histories.clone();
            if apply_move(self.mode, &mut child, &mut child_histories, pos, mover).is_err() {
                continue;
            }

            let score = self.minimax(&child, &child_histories, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
