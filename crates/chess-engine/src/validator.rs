//! Legal move filtering.
//!
//! A pseudo-legal move is legal when, after playing it, the mover's king is
//! not attacked. That is decided by playing the move on the board, asking
//! [`is_in_check`], and taking it back with [`Board::unmake`]. Pins and
//! "must answer check" both fall out of this one test.

use chess_core::{Color, Move, Square};
use tracing::trace;

use crate::check::is_in_check;
use crate::movegen::pseudo_legal_moves;
use crate::{Board, IllegalReason, SquareSet};

/// Decides move legality for one side on a board.
///
/// The validator borrows the board mutably for its make/unmake trials, but
/// every public method leaves it exactly as it found it.
pub struct MoveValidator<'a> {
    board: &'a mut Board,
    side: Color,
}

impl<'a> MoveValidator<'a> {
    /// Creates a validator for `side` moving on `board`.
    pub fn new(board: &'a mut Board, side: Color) -> Self {
        MoveValidator { board, side }
    }

    /// Checks a move, returning the reason when it is not legal.
    pub fn validate(&mut self, from: Square, to: Square) -> Result<(), IllegalReason> {
        let piece = *self.board.piece_at(from).ok_or(IllegalReason::EmptySquare)?;
        if piece.color != self.side {
            return Err(IllegalReason::WrongTurn(piece.color));
        }
        if !pseudo_legal_moves(self.board, &piece).contains(to) {
            return Err(IllegalReason::Unreachable);
        }
        if self.exposes_king(Move::new(from, to)) {
            return Err(IllegalReason::ExposesKing);
        }
        Ok(())
    }

    /// Returns true if the move is legal.
    pub fn is_legal(&mut self, from: Square, to: Square) -> bool {
        self.validate(from, to).is_ok()
    }

    /// Returns the legal destinations of the piece on `from`. Empty when the
    /// square is empty or holds a piece of the other side.
    pub fn legal_destinations(&mut self, from: Square) -> SquareSet {
        let piece = match self.board.piece_at(from) {
            Some(p) if p.color == self.side => *p,
            _ => return SquareSet::EMPTY,
        };
        pseudo_legal_moves(self.board, &piece)
            .into_iter()
            .filter(|&to| !self.exposes_king(Move::new(from, to)))
            .collect()
    }

    /// Returns true if the side has at least one legal move.
    pub fn has_legal_move(&mut self) -> bool {
        let own: Vec<Square> = self.board.pieces_of(self.side).map(|p| p.square()).collect();
        own.into_iter()
            .any(|from| !self.legal_destinations(from).is_empty())
    }

    fn exposes_king(&mut self, mv: Move) -> bool {
        let Some(undo) = self.board.make(mv) else {
            return false;
        };
        let exposed = is_in_check(self.board, self.side);
        self.board.unmake(undo);
        trace!(%mv, side = %self.side, exposed, "simulated move");
        exposed
    }
}
