//! Error types for moves and score persistence.

use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was refused without touching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidStateReason {
    /// The round has been won; only a new round accepts moves.
    #[display("the round is over")]
    RoundOver,
    /// The previous move has not been settled yet.
    #[display("the previous move is still settling")]
    Transitioning,
    /// The computer is to move.
    #[display("waiting for the computer")]
    AwaitingComputer,
}

/// Error returned by [`crate::GameMachine::apply_move`] and [`crate::Board::set`].
///
/// Both kinds are recoverable and never leave a partial mutation behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    /// Cell occupied or coordinates outside `0..3`.
    #[display("Illegal move at ({row}, {col})")]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Move attempted while the round is over or a turn is changing hands.
    #[display("Move rejected: {reason}")]
    InvalidState {
        /// What blocked the move.
        reason: InvalidStateReason,
    },
}

/// Score store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error: {} at {}:{}", message, file, line)]
pub struct ScoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreError {
    /// Creates a new score error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::IllegalMove { row: 1, col: 2 };
        assert_eq!(err.to_string(), "Illegal move at (1, 2)");

        let err = MoveError::InvalidState {
            reason: InvalidStateReason::Transitioning,
        };
        assert!(err.to_string().contains("settling"));
    }

    #[test]
    fn test_score_error_tracks_location() {
        let err = ScoreError::new("disk full");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("disk full"));
    }
}
