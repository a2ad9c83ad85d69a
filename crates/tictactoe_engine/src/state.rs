//! Game state owned by a session.

use super::rules::{self, MoveHistories, MoveHistory, WinLine};
use super::{Board, EngineError, Mark, Move, Position, RuleMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing with the given mark to move.
    InProgress(Mark),
    /// Game ended with a completed line.
    Won(WinLine),
    /// Game ended with a full board and no line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) mode: RuleMode,
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    /// Live moves per mark. Only populated in limited mode.
    pub(crate) histories: MoveHistories,
    /// Every accepted move since the last restart.
    pub(crate) log: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new(mode: RuleMode) -> Self {
        Self {
            mode,
            board: Board::new(),
            status: GameStatus::InProgress(Mark::X),
            histories: MoveHistories::new(),
            log: Vec::new(),
        }
    }

    /// The rule mode.
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// The mark to move, if the game is in progress.
    pub fn turn(&self) -> Option<Mark> {
        match self.status {
            GameStatus::InProgress(mark) => Some(mark),
            _ => None,
        }
    }

    /// The winning line, if the game is won.
    pub fn win_line(&self) -> Option<&WinLine> {
        match &self.status {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    /// Whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Whether the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Per-mark live move histories.
    pub fn histories(&self) -> &MoveHistories {
        &self.histories
    }

    /// Live moves of `mark`, oldest first (limited mode).
    pub fn recent_moves(&self, mark: Mark) -> &MoveHistory {
        self.histories.for_mark(mark)
    }

    /// Every accepted move since the last restart.
    pub fn log(&self) -> &[Move] {
        &self.log
    }

    /// Moves whose marks are still on the board.
    pub fn live_moves(&self) -> Vec<Move> {
        match self.mode {
            RuleMode::Classic => self.log.clone(),
            RuleMode::Limited => self
                .histories
                .for_mark(Mark::X)
                .iter()
                .chain(self.histories.for_mark(Mark::O).iter())
                .copied()
                .collect(),
        }
    }

    /// Places a move and updates the status. Callers check preconditions.
    pub(crate) fn apply(&mut self, mov: Move) -> Result<Option<Position>, EngineError> {
        let evicted = rules::apply_move(
            self.mode,
            &mut self.board,
            &mut self.histories,
            mov.position,
            mov.mark,
        )?;
        self.log.push(mov);

        self.status = if let Some(line) = rules::check_winner(&self.board) {
            GameStatus::Won(line)
        } else if rules::is_draw(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(mov.mark.opponent())
        };
        debug!(%mov, status = ?self.status, "Move applied");
        Ok(evicted)
    }
}
