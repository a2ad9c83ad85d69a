//! Tic-tac-toe rule engine.
//!
//! Pure, synchronous game logic for classic tic-tac-toe and the
//! limited-moves variant, where each mark keeps only its three most
//! recent cells and the oldest one vanishes when a fourth is placed.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s addressed by `(row, col)`
//! - **Rules**: win/draw detection and limited-moves eviction ([`rules`])
//! - **Move selector**: minimax with alpha-beta pruning ([`MoveSelector`])
//! - **Session**: the state machine a presentation layer drives ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Mark, Position, RuleMode};
//!
//! let mut session = GameSession::vs_computer(RuleMode::Classic);
//! session.player_move(0, 0)?;
//! assert_eq!(session.computer_move()?, Position::Center);
//! assert_eq!(session.turn(), Some(Mark::X));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod invariants;
mod position;
pub mod rules;
mod selector;
mod session;
mod snapshot;
mod state;
mod types;

// Crate-level exports - Domain types
pub use action::Move;
pub use position::Position;
pub use types::{Board, Cell, Mark, RuleMode};

// Crate-level exports - Errors
pub use error::{EngineError, MoveRejection};

// Crate-level exports - Rules
pub use rules::{
    HISTORY_CAPACITY, LINES, MoveHistories, MoveHistory, WinLine, apply_limited_move,
    apply_move, check_winner, is_draw, is_full,
};

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, Contract, MarksTurn, MoveContract};
pub use invariants::{
    GameInvariants, HistoryCapacityInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MarkBalanceInvariant,
};

// Crate-level exports - Move selection
pub use selector::{CLASSIC_SEARCH_DEPTH, LIMITED_SEARCH_DEPTH, MoveSelector};

// Crate-level exports - Session
pub use session::{GameSession, Opponent};
pub use snapshot::GameSnapshot;
pub use state::{GameState, GameStatus};
