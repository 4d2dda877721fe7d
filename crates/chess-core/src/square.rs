//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when a coordinate does not name a square on the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("invalid square name: '{0}'")]
    InvalidAlgebraic(String),
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are addressed by `(row, col)` with both in `0..8`. Row 0 is Black's
/// back rank (rank 8) and row 7 is White's back rank (rank 1); column 0 is the
/// a-file. The index is `row * 8 + col`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(i32, i32)", try_from = "(i32, i32)")]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, rejecting anything off the board.
    pub fn new(row: i32, col: i32) -> Result<Self, SquareError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square((row * 8 + col) as u8))
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidAlgebraic(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        let col = (file - b'a') as i32;
        let row = 7 - (rank - b'1') as i32;
        Square::new(row, col)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square displaced by the given row and column deltas, or
    /// `None` if that falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(
            self.row() as i32 + d_row as i32,
            self.col() as i32 + d_col as i32,
        )
        .ok()
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    /// Iterates all 64 squares in scan order (row 0 first, column 0 first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (i32, i32) {
    fn from(sq: Square) -> Self {
        (sq.row() as i32, sq.col() as i32)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
