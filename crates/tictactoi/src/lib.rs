//! Tic-tac-toe game engine.
//!
//! A 3x3 game for two humans or a human against the computer, with one
//! house rule: a full board without a line does not end the round. Each
//! player's oldest mark is removed instead and play goes on.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of optional marks, no rules
//! - **Rules**: win-lines, draw detection, legal moves
//! - **Ledger**: chronological record of marks on the board
//! - **Machine**: owns the state, applies moves, resolves wins and draws
//! - **AI**: random, tactical and minimax opponents run off the interactive path
//!
//! # Example
//!
//! ```
//! use tictactoi::{GameMachine, GameMode, MemoryScoreStore, MoveOutcome};
//!
//! let mut machine = GameMachine::new(MemoryScoreStore::new());
//! machine.start_new_round(GameMode::Friend);
//! assert_eq!(machine.apply_move(1, 1), Ok(MoveOutcome::Continue));
//! machine.settle();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod ledger;
mod machine;
mod score;
mod state;

pub mod ai;
pub mod invariants;
pub mod rules;

pub use ai::{AiRequest, AiResponse, AiWorker, Difficulty, RequestId, compute_move};
pub use board::{Board, Cell, Mark, SIZE};
pub use error::{InvalidStateReason, MoveError, ScoreError};
pub use ledger::{Move, MoveLedger};
pub use machine::{Delivery, GameMachine, MoveOutcome, TurnLatch};
pub use rules::{WIN_LINES, Win, WinLine, is_draw, legal_moves, winner};
pub use score::{MemoryScoreStore, ScoreStore};
pub use state::{GameMode, GameState, Phase, Scoreboard};
