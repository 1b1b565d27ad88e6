//! Medium tier: one-move lookahead.

use super::random::random_move;
use crate::board::{Board, Cell, Mark};
use crate::rules::legal_moves;
use crate::rules::win::has_line;
use rand::Rng;

/// First empty cell (row-major) that completes a line for `mark`.
pub fn winning_move(board: &Board, mark: Mark) -> Option<Cell> {
    legal_moves(board)
        .into_iter()
        .find(|&cell| has_line(&board.with(cell, mark), mark))
}

/// Take an immediate win, else block the human's immediate win, else play randomly.
pub fn tactical_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Cell> {
    winning_move(board, computer)
        .or_else(|| winning_move(board, human))
        .or_else(|| random_move(board, rng))
}
