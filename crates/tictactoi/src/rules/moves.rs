//! Move legality.

use crate::board::{Board, Cell};

/// All empty cells, in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Cell> {
    Cell::all().filter(|&cell| board.is_empty_at(cell)).collect()
}
