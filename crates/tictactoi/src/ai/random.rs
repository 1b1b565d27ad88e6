//! Easy tier: any empty cell.

use crate::board::{Board, Cell};
use crate::rules::legal_moves;
use rand::Rng;

/// Uniformly random legal cell, `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    let moves = legal_moves(board);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}
