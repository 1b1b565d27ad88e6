//! Computer opponent.
//!
//! [`compute_move`] is a pure function of a frozen board, the difficulty,
//! both marks and a random source, so it can run on any thread. The
//! [`AiWorker`] runs it off the interactive path and reports back through a
//! channel; results are matched to requests by [`RequestId`].

mod minimax;
mod random;
mod request;
mod tactical;
mod worker;

pub use minimax::{best_move, evaluate_moves};
pub use random::random_move;
pub use request::{AiRequest, AiResponse, RequestId};
pub use tactical::{tactical_move, winning_move};
pub use worker::AiWorker;

use crate::board::{Board, Cell, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal cell.
    Easy,
    /// Wins when it can, blocks when it must, otherwise random.
    #[default]
    Medium,
    /// Exhaustive minimax; never loses a standard game.
    Hard,
}

/// Picks the computer's move on `snapshot`.
///
/// Returns `None` only when the board has no empty cell. Easy and Medium
/// draw from `rng`; Hard is deterministic for a given board.
///
/// Hard treats a full board as a finished game. It does not model the
/// draw-recovery rule, so it never plans for a draw reopening the board.
#[instrument(skip(snapshot, rng))]
pub fn compute_move<R: Rng + ?Sized>(
    snapshot: &Board,
    difficulty: Difficulty,
    computer: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Cell> {
    debug_assert_ne!(computer, human, "computer and human share a mark");
    let choice = match difficulty {
        Difficulty::Easy => random_move(snapshot, rng),
        Difficulty::Medium => tactical_move(snapshot, computer, human, rng),
        Difficulty::Hard => best_move(snapshot, computer, human),
    };
    debug!(?choice, "Computer move chosen");
    choice
}
