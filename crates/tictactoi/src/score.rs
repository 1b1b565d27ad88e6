//! Narrow seam to the persisted per-player win counts.

use crate::board::Mark;
use crate::error::ScoreError;
use std::collections::HashMap;

/// Persisted integer score per player.
///
/// The state machine reads both scores when it is built and at every round
/// start, and writes the winner's score after each win. Zeroing the scores
/// is the store's business, not the game's.
pub trait ScoreStore {
    /// Reads the stored score for `mark`, 0 when nothing is stored.
    fn load_score(&self, mark: Mark) -> u32;

    /// Persists `score` for `mark`.
    fn save_score(&mut self, mark: Mark, score: u32) -> Result<(), ScoreError>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HashMap<Mark, u32>,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the given totals.
    pub fn with_scores(first: u32, second: u32) -> Self {
        Self {
            scores: HashMap::from([(Mark::First, first), (Mark::Second, second)]),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_score(&self, mark: Mark) -> u32 {
        self.scores.get(&mark).copied().unwrap_or_default()
    }

    fn save_score(&mut self, mark: Mark, score: u32) -> Result<(), ScoreError> {
        self.scores.insert(mark, score);
        Ok(())
    }
}
