//! Terminal tic-tac-toe.
//!
//! Presentation glue around [`tictactoe_engine`]: command-line parsing,
//! an optional TOML config for player names and pacing, and a
//! line-oriented terminal loop. All game rules live in the engine, which
//! is re-exported here.
//!
//! # Example
//!
//! ```
//! use tictactoe::{FrontendConfig, GameSession, RuleMode, Terminal};
//! use std::time::Duration;
//!
//! # fn example() -> anyhow::Result<()> {
//! let session = GameSession::two_player(RuleMode::Limited);
//! let names = FrontendConfig::default().names(session.opponent())?;
//! let mut output = Vec::new();
//! let mut terminal = Terminal::new(session, names, Duration::ZERO, "1 1\nquit\n".as_bytes(), &mut output);
//! terminal.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

// Crate-level exports - CLI
pub use cli::{Cli, ModeArg, OpponentArg};

// Crate-level exports - Configuration
pub use config::{ConfigError, FrontendConfig, MAX_NAME_LENGTH, PlayerNames};

// Crate-level exports - Terminal front end
pub use terminal::{Command, Terminal, parse_command};

// Crate-level exports - Engine
pub use tictactoe_engine::*;
