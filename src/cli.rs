//! Command-line interface for the terminal game.

use clap::{Parser, ValueEnum};
use tictactoe_engine::{Mark, Opponent, RuleMode};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Classic and limited-moves tic-tac-toe, alone or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rule set to play
    #[arg(short, long, value_enum, default_value_t = ModeArg::Classic)]
    pub mode: ModeArg,

    /// Who plays the second mark
    #[arg(short, long, value_enum, default_value_t = OpponentArg::Human)]
    pub opponent: OpponentArg,

    /// Let the computer play X and move first
    #[arg(long)]
    pub computer_first: bool,

    /// Name for the X player (at most 10 characters)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for the O player (at most 10 characters)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

/// Rule set selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Standard rules
    Classic,
    /// Each mark keeps only its last three cells
    Limited,
}

impl From<ModeArg> for RuleMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => RuleMode::Classic,
            ModeArg::Limited => RuleMode::Limited,
        }
    }
}

/// Opponent selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentArg {
    /// Two players share the keyboard
    Human,
    /// Play against the minimax computer
    Computer,
}

impl Cli {
    /// The engine rule mode.
    pub fn rule_mode(&self) -> RuleMode {
        self.mode.into()
    }

    /// The engine opponent, honoring `--computer-first`.
    pub fn opponent(&self) -> Opponent {
        match (self.opponent, self.computer_first) {
            (OpponentArg::Human, _) => Opponent::Human,
            (OpponentArg::Computer, false) => Opponent::Computer(Mark::O),
            (OpponentArg::Computer, true) => Opponent::Computer(Mark::X),
        }
    }
}
