//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// One of the eight fixed triples of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Cell; 3]);

impl WinLine {
    /// The three cells, in table order.
    pub fn cells(&self) -> [Cell; 3] {
        self.0
    }

    /// First and last cell, the endpoints a renderer strokes between.
    pub fn endpoints(&self) -> (Cell, Cell) {
        (self.0[0], self.0[2])
    }

    /// True when the line passes through `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

/// All win-lines: rows top to bottom, columns left to right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)]),
    WinLine([Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)]),
    WinLine([Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)]),
    // Columns
    WinLine([Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)]),
    WinLine([Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)]),
    WinLine([Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)]),
    // Diagonals
    WinLine([Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)]),
    WinLine([Cell::at(0, 2), Cell::at(1, 1), Cell::at(2, 0)]),
];

/// A completed line and who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// The winning mark.
    pub player: Mark,
    /// The first completed line in table order.
    pub line: WinLine,
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WIN_LINES`] order whose three cells hold the
/// same mark. When one placement completes two lines, the earlier one is
/// reported.
pub fn winner(board: &Board) -> Option<Win> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let mark = board.mark_at(a)?;
        (board.mark_at(b) == Some(mark) && board.mark_at(c) == Some(mark))
            .then(|| Win::new(mark, *line))
    })
}

/// True when `mark` has completed any line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.cells().iter().all(|&c| board.mark_at(c) == Some(mark)))
}
