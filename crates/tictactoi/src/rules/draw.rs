//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::board::Board;
use tracing::instrument;

/// A full board with no completed line.
///
/// In this variant a draw does not end the round; the state machine
/// reopens the board instead.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_rows(["XOX", "XOO", "OX."]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_rows(["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X holds the left column.
        let board = Board::from_rows(["XOX", "XOO", "XXO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
