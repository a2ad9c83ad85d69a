//! Serializable snapshot of a session for presentation layers.

use super::{GameState, Mark, Move, RuleMode};
use serde::{Deserialize, Serialize};

/// Flat, render-ready view of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Rule mode.
    pub mode: RuleMode,
    /// Board rows; `None` for empty cells.
    pub rows: [[Option<Mark>; 3]; 3],
    /// Mark to move, if in progress.
    pub turn: Option<Mark>,
    /// Winning mark, if won.
    pub winner: Option<Mark>,
    /// Winning line as `(row, col)` pairs, if won.
    pub win_line: Option<[(usize, usize); 3]>,
    /// Whether the game is drawn.
    pub draw: bool,
    /// X's live cells, oldest first (limited mode).
    pub recent_x: Vec<(usize, usize)>,
    /// O's live cells, oldest first (limited mode).
    pub recent_o: Vec<(usize, usize)>,
    /// Every accepted move since the last restart.
    pub moves: Vec<Move>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let recent = |mark| {
            state
                .recent_moves(mark)
                .iter()
                .map(|m| m.position.coords())
                .collect()
        };
        Self {
            mode: state.mode(),
            rows: state.board().rows().map(|row| row.map(|cell| cell.mark())),
            turn: state.turn(),
            winner: state.win_line().map(|line| line.mark),
            win_line: state.win_line().map(|line| line.coords()),
            draw: state.is_draw(),
            recent_x: recent(Mark::X),
            recent_o: recent(Mark::O),
            moves: state.log().to_vec(),
        }
    }
}

impl GameSnapshot {
    /// Whether the game is over.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.draw
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match (self.turn, self.winner) {
            (Some(turn), _) => format!("In progress. Player {} to move.", turn),
            (None, Some(winner)) => format!("Game over. Player {} wins!", winner),
            (None, None) => "Game over. Draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, Position};

    #[test]
    fn test_snapshot_of_new_game() {
        let session = GameSession::two_player(RuleMode::Classic);
        let snap = session.snapshot();
        assert_eq!(snap.rows, [[None; 3]; 3]);
        assert_eq!(snap.turn, Some(Mark::X));
        assert!(!snap.is_over());
        assert_eq!(snap.status_string(), "In progress. Player X to move.");
    }

    #[test]
    fn test_snapshot_after_win() {
        let mut session = GameSession::two_player(RuleMode::Classic);
        for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            session.player_move(row, col).unwrap();
        }
        let snap = session.snapshot();
        assert_eq!(snap.winner, Some(Mark::X));
        assert_eq!(snap.win_line, Some([(0, 0), (1, 1), (2, 2)]));
        assert_eq!(snap.moves.len(), 5);
        assert_eq!(snap.moves[4].position, Position::BottomRight);
        assert_eq!(snap.status_string(), "Game over. Player X wins!");
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut session = GameSession::two_player(RuleMode::Limited);
        session.player_move(1, 1).unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["mode"], "Limited");
        assert_eq!(json["rows"][1][1], "X");
        assert_eq!(json["turn"], "O");
        assert_eq!(json["recent_x"][0], serde_json::json!([1, 1]));
        assert_eq!(json["draw"], false);
    }
}
