//! Hard tier: exhaustive minimax over the remaining game tree.
//!
//! At most nine plies with branching of at most nine, so no pruning or
//! transposition table. Scores are `10 - depth` for a computer win and
//! `depth - 10` for a human win, depth counted from the searched position,
//! so quicker wins and slower losses are preferred. A full board without a
//! line scores 0.

use crate::board::{Board, Cell, Mark};
use crate::rules::{legal_moves, winner};
use tracing::{instrument, trace};

const WIN_SCORE: i32 = 10;

/// Minimax score of every legal root move, in row-major order.
pub fn evaluate_moves(board: &Board, computer: Mark, human: Mark) -> Vec<(Cell, i32)> {
    legal_moves(board)
        .into_iter()
        .map(|cell| {
            let score = score(&board.with(cell, computer), human, computer, human, 1);
            trace!(%cell, score, "Root move scored");
            (cell, score)
        })
        .collect()
}

/// First legal move (row-major) with the maximum minimax score.
#[instrument(skip(board))]
pub fn best_move(board: &Board, computer: Mark, human: Mark) -> Option<Cell> {
    let mut best: Option<(Cell, i32)> = None;
    for (cell, score) in evaluate_moves(board, computer, human) {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((cell, score));
        }
    }
    best.map(|(cell, _)| cell)
}

fn score(board: &Board, to_move: Mark, computer: Mark, human: Mark, depth: i32) -> i32 {
    if let Some(win) = winner(board) {
        return if win.player == computer {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.is_full() {
        return 0;
    }

    let next = if to_move == computer { human } else { computer };
    let children = legal_moves(board)
        .into_iter()
        .map(|cell| score(&board.with(cell, to_move), next, computer, human, depth + 1));
    let best = if to_move == computer {
        children.max()
    } else {
        children.min()
    };
    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_rows(["OO.", "XX.", "X.."]);
        assert_eq!(best_move(&board, Mark::Second, Mark::First), Cell::new(0, 2));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = Board::from_rows(["XX.", ".O.", "..."]);
        assert_eq!(best_move(&board, Mark::Second, Mark::First), Cell::new(0, 2));
    }

    #[test]
    fn test_prefers_fastest_win() {
        // X wins now at (0,2); (2,2) also wins later, but slower.
        let board = Board::from_rows(["XX.", "OO.", "..."]);
        let scores = evaluate_moves(&board, Mark::First, Mark::Second);
        let now = scores.iter().find(|(c, _)| *c == Cell::at(0, 2)).unwrap().1;
        assert_eq!(now, WIN_SCORE - 1);
        assert!(scores.iter().all(|(_, s)| *s <= now));
        assert_eq!(best_move(&board, Mark::First, Mark::Second), Cell::new(0, 2));
    }

    #[test]
    fn test_empty_board_is_a_draw_everywhere() {
        let scores = evaluate_moves(&Board::new(), Mark::First, Mark::Second);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|(_, s)| *s == 0));
        // Ties go to the first cell in row-major order.
        assert_eq!(best_move(&Board::new(), Mark::First, Mark::Second), Cell::new(0, 0));
    }

    #[test]
    fn test_deterministic() {
        let board = Board::from_rows(["X..", "...", "..."]);
        let first = best_move(&board, Mark::Second, Mark::First);
        for _ in 0..3 {
            assert_eq!(best_move(&board, Mark::Second, Mark::First), first);
        }
        // Only the centre holds the draw against a corner opening.
        assert_eq!(first, Cell::new(1, 1));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(best_move(&Board::from_rows(["XOX", "OXX", "OXO"]), Mark::First, Mark::Second), None);
    }
}
