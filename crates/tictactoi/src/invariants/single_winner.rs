//! At most one player can have a completed line.

use super::Invariant;
use crate::board::Mark;
use crate::rules::win::has_line;
use crate::state::GameState;

/// Invariant: the board never shows completed lines for both marks.
///
/// Play stops at the first completed line, so a second player's line can
/// only appear through corruption.
pub struct SingleWinnerInvariant;

impl Invariant for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        !(has_line(board, Mark::First) && has_line(board, Mark::Second))
    }

    fn description() -> &'static str {
        "At most one player has a completed line"
    }
}
