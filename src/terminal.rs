//! Line-oriented terminal front end.
//!
//! Reads commands from any [`BufRead`], renders to any [`Write`], and
//! drives a [`GameSession`]. Rejected moves are reported and ignored.

use crate::config::PlayerNames;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{EngineError, GameSession, GameStatus, RuleMode};
use tracing::{debug, info, instrument, warn};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark at `(row, col)`.
    Place(usize, usize),
    /// Start over.
    Restart,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown,
}

/// Parses one input line.
///
/// Accepts `row col` or `row,col` with 0-based indices in 0..=2, or the
/// words `restart` / `quit` (`r` / `q`).
pub fn parse_command(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "restart" | "r" => return Command::Restart,
        "quit" | "q" | "exit" => return Command::Quit,
        _ => {}
    }

    let parts: Vec<_> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) if row <= 2 && col <= 2 => Command::Place(row, col),
            _ => Command::Unknown,
        },
        _ => Command::Unknown,
    }
}

/// Terminal game loop.
pub struct Terminal<R, W> {
    session: GameSession,
    names: PlayerNames,
    think_delay: Duration,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal around a session.
    pub fn new(
        session: GameSession,
        names: PlayerNames,
        think_delay: Duration,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            names,
            think_delay,
            input,
            output,
        }
    }

    /// The driven session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Terminal game started");
        self.render()?;

        loop {
            if self.session.is_computer_turn() {
                self.play_computer()?;
                continue;
            }

            self.prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match parse_command(&line) {
                Command::Quit => break,
                Command::Restart => {
                    self.session.restart();
                    writeln!(self.output, "New game.")?;
                    self.render()?;
                }
                Command::Place(row, col) => match self.session.player_move(row, col) {
                    Ok(_) => self.render()?,
                    Err(e) if e.is_invalid_move() => {
                        debug!(error = %e, "Move ignored");
                        writeln!(self.output, "{}", rejection_message(&e))?;
                    }
                    Err(e) => return Err(e.into()),
                },
                Command::Unknown => {
                    writeln!(
                        self.output,
                        "Enter a row and column from 0 to 2 (e.g. `1 2`), `restart` or `quit`."
                    )?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn play_computer(&mut self) -> Result<()> {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        let mark = self.session.turn();
        let pos = self.session.computer_move().inspect_err(|e| {
            warn!(error = %e, "Computer move failed");
        })?;
        if let Some(mark) = mark {
            writeln!(self.output, "{} plays {}.", self.names.name(mark), pos)?;
        }
        self.render()
    }

    fn prompt(&mut self) -> Result<()> {
        match self.session.turn() {
            Some(mark) => write!(
                self.output,
                "{} ({}), your move: ",
                self.names.name(mark),
                mark
            )?,
            None => write!(self.output, "Type `restart` to play again or `quit`: ")?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.session.board().display())?;
        writeln!(self.output)?;

        match *self.session.status() {
            GameStatus::Won(line) => {
                let coords = line
                    .coords()
                    .map(|(row, col)| format!("({}, {})", row, col))
                    .join(" ");
                writeln!(self.output, "{} Wins! [{}]", self.names.name(line.mark), coords)?;
            }
            GameStatus::Draw => writeln!(self.output, "Game Drawn!")?,
            GameStatus::InProgress(mark) => {
                if self.session.mode() == RuleMode::Limited {
                    let history = self.session.recent_moves(mark);
                    if let (true, Some(oldest)) = (history.is_at_capacity(), history.oldest()) {
                        writeln!(
                            self.output,
                            "{}'s mark at {} vanishes on the next move.",
                            mark, oldest.position
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn rejection_message(err: &EngineError) -> String {
    match err {
        EngineError::InvalidMove(reason) => format!("Move ignored: {}.", reason),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;
    use tictactoe_engine::{Mark, Opponent};

    fn run(session: GameSession, input: &str) -> (GameSession, String) {
        let names = FrontendConfig::default()
            .names(session.opponent())
            .unwrap();
        let mut output = Vec::new();
        let mut terminal = Terminal::new(
            session,
            names,
            Duration::ZERO,
            input.as_bytes(),
            &mut output,
        );
        terminal.run().unwrap();
        let session = terminal.session().clone();
        drop(terminal);
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1 2\n"), Command::Place(1, 2));
        assert_eq!(parse_command(" 0,0 "), Command::Place(0, 0));
        assert_eq!(parse_command("RESTART"), Command::Restart);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("3 1"), Command::Unknown);
        assert_eq!(parse_command("1"), Command::Unknown);
        assert_eq!(parse_command("a b"), Command::Unknown);
    }

    #[test]
    fn test_two_player_win() {
        let (session, output) = run(
            GameSession::two_player(RuleMode::Classic),
            "0 0\n1 0\n0 1\n1 1\n0 2\nquit\n",
        );
        assert_eq!(session.win_line().map(|l| l.mark), Some(Mark::X));
        assert!(output.contains("Player X Wins! [(0, 0) (0, 1) (0, 2)]"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let (session, output) = run(GameSession::two_player(RuleMode::Classic), "1 1\n1 1\n");
        assert!(output.contains("Move ignored: Center (1, 1) is already occupied."));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.turn(), Some(Mark::O));
    }

    #[test]
    fn test_unknown_input_prompts_again() {
        let (session, output) = run(GameSession::two_player(RuleMode::Classic), "hello\n5 5\n");
        assert_eq!(output.matches("Enter a row and column").count(), 2);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_computer_replies_automatically() {
        let (session, output) = run(GameSession::vs_computer(RuleMode::Classic), "0 0\nq\n");
        assert!(output.contains("Computer plays Center (1, 1)."));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.turn(), Some(Mark::X));
    }

    #[test]
    fn test_computer_first() {
        let session = GameSession::new(RuleMode::Classic, Opponent::Computer(Mark::X));
        let (session, output) = run(session, "");
        assert!(output.contains("Computer plays Top-left (0, 0)."));
        assert_eq!(session.turn(), Some(Mark::O));
    }

    #[test]
    fn test_restart_clears_board() {
        let (session, output) =
            run(GameSession::two_player(RuleMode::Limited), "1 1\n0 0\nrestart\n");
        assert!(output.contains("New game."));
        assert!(session.history().is_empty());
        assert_eq!(session.turn(), Some(Mark::X));
    }

    #[test]
    fn test_limited_mode_warns_before_eviction() {
        let (_, output) = run(
            GameSession::two_player(RuleMode::Limited),
            "0 0\n1 1\n2 2\n2 0\n0 2\n1 0\n",
        );
        assert!(output.contains("X's mark at Top-left (0, 0) vanishes on the next move."));
    }
}
