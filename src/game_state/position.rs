//! Immutable (row, column) coordinate on the 8x8 board.
//!
//! Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
//! (rank 1). Column 0 is the `a` file.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::position_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Build a position, rejecting coordinates outside `0..=7`.
    pub fn new(row: u8, column: u8) -> Result<Self, ChessErrors> {
        if row > 7 || column > 7 {
            return Err(ChessErrors::InvalidRowOrColumn(row as i16, column as i16));
        }
        Ok(Position { row, column })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Shift by a row/column delta, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Same row, different column. Caller guarantees `column <= 7`.
    #[inline]
    pub(crate) fn with_column(self, column: u8) -> Self {
        debug_assert!(column < 8);
        Position {
            row: self.row,
            column,
        }
    }

    /// All 64 squares, row-major from `a8` to `h1`.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |column| Position { row, column }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&position_to_algebraic(*self))
    }
}
