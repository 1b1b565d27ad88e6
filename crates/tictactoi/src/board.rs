//! Core board types: marks, cells and the 3x3 grid.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// One of the two players' marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The player who opens a round by convention (drawn as X).
    #[display("X")]
    First,
    /// The other player (drawn as O).
    #[display("O")]
    Second,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }
}

/// A coordinate on the board, always in range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell, or `None` when either coordinate is outside `0..3`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Cell from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE * SIZE).map(|i| Cell::at(i / SIZE, i % SIZE))
    }
}

/// 3x3 grid of optional marks.
///
/// The board knows nothing about turns or rules. It is `Copy`, so every
/// snapshot handed across a thread boundary is an independent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at the given coordinates, `None` when empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        Cell::new(row, col).and_then(|cell| self.mark_at(cell))
    }

    /// Returns the mark in a cell.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.row][cell.col]
    }

    /// Places a mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the cell is occupied or the
    /// coordinates are outside `0..3`. The board is untouched on error.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let cell = Cell::new(row, col).ok_or(MoveError::IllegalMove { row, col })?;
        if !self.is_empty_at(cell) {
            return Err(MoveError::IllegalMove { row, col });
        }
        self.put(cell, mark);
        Ok(())
    }

    /// Empties a cell. Out-of-range coordinates are ignored.
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(cell) = Cell::new(row, col) {
            self.cells[cell.row][cell.col] = None;
        }
    }

    /// True when all nine cells are marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// True when the cell holds no mark.
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.mark_at(cell).is_none()
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|m| m.is_some()).count()
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|m| **m == Some(mark))
            .count()
    }

    /// Board with `mark` written into `cell`, regardless of what was there.
    ///
    /// Used by search code that already knows the cell is empty.
    pub(crate) fn with(mut self, cell: Cell, mark: Mark) -> Self {
        self.put(cell, mark);
        self
    }

    pub(crate) fn put(&mut self, cell: Cell, mark: Mark) {
        self.cells[cell.row][cell.col] = Some(mark);
    }

    pub(crate) fn remove(&mut self, cell: Cell) {
        self.cells[cell.row][cell.col] = None;
    }

    /// Builds a board from rows of `'X'`, `'O'` and anything else for empty.
    ///
    /// Handy for fixtures: `Board::from_rows(["XX.", "OO.", "..."])`.
    pub fn from_rows(rows: [&str; SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(SIZE).enumerate() {
                match ch {
                    'X' | 'x' => board.put(Cell::at(row, col), Mark::First),
                    'O' | 'o' => board.put(Cell::at(row, col), Mark::Second),
                    _ => {}
                }
            }
        }
        board
    }
}
