//! Read-only board view for presentation layers.

use chess_core::{Color, Piece, Square};
use serde::Serialize;
use std::fmt;

use crate::Board;

/// Color and kind of a piece, without any game bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub color: Color,
    pub piece: Piece,
}

/// An 8x8 copy of the board for rendering. `cells[row][col]`, row 0 being
/// Black's back rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub cells: [[Option<PieceView>; 8]; 8],
}

impl BoardSnapshot {
    /// Captures the current contents of a board.
    pub fn capture(board: &Board) -> Self {
        let mut cells = [[None; 8]; 8];
        for p in board.pieces() {
            let sq = p.square();
            cells[sq.row() as usize][sq.col() as usize] = Some(PieceView {
                color: p.color,
                piece: p.piece,
            });
        }
        BoardSnapshot { cells }
    }

    /// Returns the piece shown on a square.
    pub fn get(&self, sq: Square) -> Option<PieceView> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                match cell {
                    Some(v) => write!(f, "{} ", v.piece.to_fen_char(v.color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
