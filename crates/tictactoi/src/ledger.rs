//! Chronological record of the marks currently on the board.
//!
//! Moves are domain events, not side effects. The ledger keeps them in the
//! order they were placed so draw recovery can find each player's oldest
//! mark still standing. It is not an undo stack.

use crate::board::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A placed mark. Its sequence number is its position in the ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_new::new,
)]
#[display("{player} -> {cell}")]
pub struct Move {
    /// The cell that was marked.
    pub cell: Cell,
    /// The player who marked it.
    pub player: Mark,
}

/// Ordered sequence of moves, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move as the most recent one.
    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Removes and returns the earliest move recorded for `player`.
    #[instrument(skip(self))]
    pub fn remove_earliest(&mut self, player: Mark) -> Option<Move> {
        let idx = self.moves.iter().position(|m| m.player == player)?;
        let removed = self.moves.remove(idx);
        debug!(%removed, sequence = idx, "Removed earliest move");
        Some(removed)
    }

    /// Moves in placement order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
