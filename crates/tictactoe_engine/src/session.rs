//! Turn-by-turn game session.
//!
//! A [`GameSession`] owns a [`GameState`] and mutates it only through
//! [`GameSession::player_move`], [`GameSession::computer_move`] and
//! [`GameSession::restart`]. Rejected calls leave the state unchanged.

use super::contracts::{Contract, MoveContract};
use super::selector::MoveSelector;
use super::snapshot::GameSnapshot;
use super::{Board, EngineError, GameState, GameStatus, Mark, Move, MoveHistory, MoveRejection};
use super::{Position, RuleMode, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays against the first human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Opponent {
    /// Two humans share the board.
    #[default]
    Human,
    /// The computer plays the given mark.
    Computer(Mark),
}

impl Opponent {
    /// The computer's mark, if any.
    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            Opponent::Human => None,
            Opponent::Computer(mark) => Some(mark),
        }
    }
}

/// A game session for one presentation context.
#[derive(Debug, Clone)]
pub struct GameSession {
    opponent: Opponent,
    selector: MoveSelector,
    state: GameState,
}

impl GameSession {
    /// Creates a session in its initial state.
    #[instrument]
    pub fn new(mode: RuleMode, opponent: Opponent) -> Self {
        Self {
            opponent,
            selector: MoveSelector::new(mode),
            state: GameState::new(mode),
        }
    }

    /// Creates a two-player session.
    pub fn two_player(mode: RuleMode) -> Self {
        Self::new(mode, Opponent::Human)
    }

    /// Creates a session against the computer playing O.
    pub fn vs_computer(mode: RuleMode) -> Self {
        Self::new(mode, Opponent::Computer(Mark::O))
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rule mode.
    pub fn mode(&self) -> RuleMode {
        self.state.mode()
    }

    /// The opponent configuration.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// The board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// The mark to move, if the game is in progress.
    pub fn turn(&self) -> Option<Mark> {
        self.state.turn()
    }

    /// The winning line, if the game is won.
    pub fn win_line(&self) -> Option<&WinLine> {
        self.state.win_line()
    }

    /// Whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    /// Every accepted move since the last restart.
    pub fn history(&self) -> &[Move] {
        self.state.log()
    }

    /// Live moves of `mark`, oldest first (limited mode).
    pub fn recent_moves(&self, mark: Mark) -> &MoveHistory {
        self.state.recent_moves(mark)
    }

    /// Whether the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        matches!(
            (self.opponent, self.state.turn()),
            (Opponent::Computer(computer), Some(turn)) if computer == turn
        )
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    /// Places the current human player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfBounds`] for indices outside 0..=2.
    /// - [`EngineError::InvalidMove`] if the cell is occupied, the game is
    ///   over, or it is the computer's turn.
    #[instrument(skip(self))]
    pub fn player_move(&mut self, row: usize, col: usize) -> Result<&GameState, EngineError> {
        let pos = Position::from_coords(row, col)?;
        let mark = self
            .state
            .turn()
            .ok_or(EngineError::InvalidMove(MoveRejection::GameOver))?;
        if let Opponent::Computer(computer) = self.opponent {
            if computer == mark {
                return Err(EngineError::InvalidMove(MoveRejection::WrongTurn(
                    computer.opponent(),
                )));
            }
        }

        self.apply(Move::new(mark, pos))?;
        Ok(&self.state)
    }

    /// Lets the computer choose and play its move.
    ///
    /// Returns the position played.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMove`] if the session has no computer, the game
    /// is over, or it is the human's turn.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Position, EngineError> {
        let Opponent::Computer(computer) = self.opponent else {
            return Err(EngineError::InvalidMove(MoveRejection::NoComputerOpponent));
        };
        match self.state.turn() {
            None => return Err(EngineError::InvalidMove(MoveRejection::GameOver)),
            Some(turn) if turn != computer => {
                return Err(EngineError::InvalidMove(MoveRejection::WrongTurn(computer)));
            }
            Some(_) => {}
        }

        let pos = self
            .selector
            .select_move(self.state.board(), self.state.histories(), computer)?;
        self.apply(Move::new(computer, pos))?;
        Ok(pos)
    }

    /// Resets board, histories and turn. Always succeeds.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new(self.state.mode());
        info!(mode = %self.state.mode(), "Session restarted");
    }

    /// The single placement path shared by human and computer moves.
    fn apply(&mut self, mov: Move) -> Result<Option<Position>, EngineError> {
        MoveContract::pre(&self.state, &mov)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let evicted = self.state.apply(mov)?;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.state)?;

        if let Some(old) = evicted {
            debug!(%mov, evicted = %old, "Limited move evicted a mark");
        }
        match self.state.status() {
            GameStatus::Won(line) => info!(winner = %line.mark, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress(_) => {}
        }
        Ok(evicted)
    }
}
