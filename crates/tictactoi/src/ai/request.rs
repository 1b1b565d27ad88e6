//! Values that cross the boundary between the game and the AI worker.

use super::{Difficulty, compute_move};
use crate::board::{Board, Cell, Mark};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Monotonically increasing tag of an AI request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{_0}")]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A frozen question for the AI: "what would you play here?".
///
/// Never mutated after issue. A newer request supersedes it by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct AiRequest {
    /// Tag compared at delivery time.
    #[getter(copy)]
    id: RequestId,
    /// Board copy taken when the request was issued.
    snapshot: Board,
    /// Strength to play at.
    #[getter(copy)]
    difficulty: Difficulty,
    /// Mark the computer plays.
    #[getter(copy)]
    computer: Mark,
    /// Mark the human plays.
    #[getter(copy)]
    human: Mark,
}

impl AiRequest {
    pub(crate) fn new(id: RequestId, snapshot: Board, difficulty: Difficulty, computer: Mark) -> Self {
        Self {
            id,
            snapshot,
            difficulty,
            computer,
            human: computer.opponent(),
        }
    }

    /// Runs the search synchronously and tags the answer with this request's id.
    pub fn compute<R: Rng + ?Sized>(&self, rng: &mut R) -> AiResponse {
        let cell = compute_move(&self.snapshot, self.difficulty, self.computer, self.human, rng);
        AiResponse::new(self.id, cell)
    }
}

/// The AI's answer, matched to its request by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct AiResponse {
    /// Id of the request this answers.
    pub id: RequestId,
    /// Chosen cell, `None` when the snapshot had no empty cell.
    pub cell: Option<Cell>,
}
